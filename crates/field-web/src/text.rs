use field_core::{AlphaRaster, FieldError, GlyphRasterizer, TextStyle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Strokes text onto an offscreen 2D canvas and reads back its coverage.
/// The scratch canvas is created on first use and never attached to the page.
#[derive(Default)]
pub struct CanvasTextRasterizer {
    scratch: Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)>,
}

fn js_err(what: &str, e: JsValue) -> FieldError {
    FieldError::Rasterize(format!("{}: {:?}", what, e))
}

impl CanvasTextRasterizer {
    fn context(&mut self, size: u32) -> field_core::error::Result<&web::CanvasRenderingContext2d> {
        if self.scratch.is_none() {
            let document = crate::dom::window_document()
                .ok_or_else(|| FieldError::Rasterize("no document".into()))?;
            let canvas = document
                .create_element("canvas")
                .map_err(|e| js_err("create canvas", e))?
                .dyn_into::<web::HtmlCanvasElement>()
                .map_err(|e| js_err("canvas cast", e.into()))?;
            let ctx = canvas
                .get_context("2d")
                .map_err(|e| js_err("get_context", e))?
                .ok_or_else(|| FieldError::Rasterize("2d context unavailable".into()))?
                .dyn_into::<web::CanvasRenderingContext2d>()
                .map_err(|e| js_err("context cast", e.into()))?;
            self.scratch = Some((canvas, ctx));
        }
        let Some((canvas, ctx)) = self.scratch.as_ref() else {
            return Err(FieldError::Rasterize("scratch canvas missing".into()));
        };
        if canvas.width() != size || canvas.height() != size {
            canvas.set_width(size);
            canvas.set_height(size);
        }
        Ok(ctx)
    }
}

impl GlyphRasterizer for CanvasTextRasterizer {
    fn rasterize(&mut self, text: &str, style: &TextStyle) -> field_core::error::Result<AlphaRaster> {
        let size = style.raster_size.max(1);
        let ctx = self.context(size)?;
        let side = size as f64;
        ctx.clear_rect(0.0, 0.0, side, side);
        ctx.set_stroke_style_str("white");
        ctx.set_line_width(style.stroke_width);
        ctx.set_font(&style.font);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.stroke_text(text, side / 2.0, side / 2.0)
            .map_err(|e| js_err("strokeText", e))?;
        let image = ctx
            .get_image_data(0.0, 0.0, side, side)
            .map_err(|e| js_err("getImageData", e))?;
        AlphaRaster::from_rgba(image.width(), image.height(), &image.data().0)
    }
}
