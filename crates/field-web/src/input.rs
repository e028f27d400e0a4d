use crate::constants::WHEEL_LINE_PX;
use field_core::constants::MAX_PIXEL_RATIO;
use glam::Vec2;
use web_sys as web;

/// Wheel `deltaMode` values (WheelEvent.DOM_DELTA_*).
pub const DELTA_PIXEL: u32 = 0;
pub const DELTA_LINE: u32 = 1;
pub const DELTA_PAGE: u32 = 2;

/// Backing-store size for a CSS box at the given device pixel ratio, with the
/// ratio capped and both sides at least one pixel.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    };
    let w = (css_w.max(0.0) * dpr) as u32;
    let h = (css_h.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Normalize a wheel delta to CSS pixels.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, page_height: f64) -> f32 {
    let scale = match delta_mode {
        DELTA_LINE => WHEEL_LINE_PX as f64,
        DELTA_PAGE => page_height.max(1.0),
        _ => 1.0,
    };
    (delta_y * scale) as f32
}

/// Client position relative to a box's top-left corner.
#[inline]
pub fn client_to_local(client_x: f32, client_y: f32, left: f32, top: f32) -> Vec2 {
    Vec2::new(client_x - left, client_y - top)
}

// ---------------- DOM event adapters ----------------

/// Mouse/pointer position in canvas CSS pixels plus the canvas CSS size.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let local = client_to_local(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    );
    (local, Vec2::new(rect.width() as f32, rect.height() as f32))
}

#[inline]
pub fn first_touch_y(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_y() as f32)
}

#[inline]
pub fn viewport_size() -> Vec2 {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Vec2::new(width as f32, height as f32)
        })
        .unwrap_or(Vec2::ZERO)
}
