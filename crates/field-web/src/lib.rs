#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys as web;

pub mod constants;
pub mod curtains;
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod render;
pub mod screen;
pub mod text;

use curtains::{CurtainService, Hook};
use field_core::{CurtainTimeline, FieldConfig};
use screen::{MountOptions, MountedScreen, Navigate};

thread_local! {
    // Standalone page only: the screen and curtains booted by `start`.
    static BOOTED: RefCell<Option<(Curtains, Option<StartScreen>)>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = boot().await {
            log::error!("boot error: {:?}", e);
        }
    });
    Ok(())
}

/// Mount on the default element ids when the page provides them. Pages that
/// embed the screen in their own router call `StartScreen.mount` instead.
async fn boot() -> anyhow::Result<()> {
    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    let canvas = dom::element_by_id::<web::HtmlCanvasElement>(&document, constants::CANVAS_ID);
    let content = dom::element_by_id::<web::HtmlElement>(&document, constants::MAIN_CONTENT_ID);
    let left = dom::element_by_id::<web::HtmlElement>(&document, constants::CURTAIN_LEFT_ID);
    let right = dom::element_by_id::<web::HtmlElement>(&document, constants::CURTAIN_RIGHT_ID);
    let (Some(canvas), Some(content), Some(left), Some(right)) = (canvas, content, left, right)
    else {
        log::info!("default elements not found; waiting for StartScreen.mount");
        return Ok(());
    };
    let hint = dom::element_by_id::<web::HtmlElement>(&document, constants::SCROLL_HINT_ID);

    let config = FieldConfig::default();
    let curtains = Curtains::with_timeline(config.curtains.clone());
    curtains
        .inner
        .borrow_mut()
        .set_curtain_elements(left, right, None, None);

    let navigate: Navigate = Rc::new(|| {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        window
            .location()
            .set_hash(constants::HOME_HASH)
            .map_err(|e| anyhow::anyhow!(format!("set hash: {:?}", e)))?;
        // The landing screen is gone once the route changes.
        BOOTED.with(|b| {
            if let Some((_, screen)) = b.borrow_mut().as_mut() {
                screen.take();
            }
        });
        Ok(())
    });
    let mounted = screen::mount(MountOptions {
        canvas,
        main_content: content,
        scroll_hint: hint,
        curtains: curtains.inner.clone(),
        navigate,
        config,
    })
    .await?;
    BOOTED.with(|b| {
        *b.borrow_mut() = Some((
            curtains,
            Some(StartScreen {
                mounted: Some(mounted),
            }),
        ))
    });
    Ok(())
}

fn js_hook(f: js_sys::Function) -> Hook {
    Box::new(move || {
        f.call0(&JsValue::NULL)
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
    })
}

/// Page-level curtain transition, shared by every screen that navigates.
#[wasm_bindgen]
pub struct Curtains {
    inner: Rc<RefCell<CurtainService>>,
}

#[wasm_bindgen]
impl Curtains {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Curtains {
        Curtains::with_timeline(CurtainTimeline::default())
    }

    pub fn set_curtain_elements(
        &self,
        left: web::HtmlElement,
        right: web::HtmlElement,
        canvas: Option<web::HtmlElement>,
        content: Option<web::HtmlElement>,
    ) {
        self.inner
            .borrow_mut()
            .set_curtain_elements(left, right, canvas, content);
    }

    pub fn set_canvas_and_content(&self, canvas: web::HtmlElement, content: web::HtmlElement) {
        self.inner.borrow_mut().set_canvas_and_content(canvas, content);
    }

    /// Returns false when a transition is already running.
    pub fn close_curtains(
        &self,
        on_navigate: js_sys::Function,
        on_faded_out: Option<js_sys::Function>,
    ) -> bool {
        CurtainService::close_curtains(&self.inner, js_hook(on_navigate), on_faded_out.map(js_hook))
    }

    pub fn open_curtains(&self) {
        CurtainService::open_curtains(&self.inner);
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().is_animating()
    }
}

impl Curtains {
    pub fn with_timeline(timeline: CurtainTimeline) -> Curtains {
        Curtains {
            inner: Rc::new(RefCell::new(CurtainService::new(timeline))),
        }
    }
}

impl Default for Curtains {
    fn default() -> Self {
        Self::new()
    }
}

/// The scroll-to-enter landing screen.
#[wasm_bindgen]
pub struct StartScreen {
    mounted: Option<MountedScreen>,
}

#[wasm_bindgen]
impl StartScreen {
    /// Build the point cloud, initialise WebGPU and start the loop. Resolves
    /// to the mounted `StartScreen`; rejects when the GPU cannot be set up.
    pub fn mount(
        canvas: web::HtmlCanvasElement,
        main_content: web::HtmlElement,
        scroll_hint: Option<web::HtmlElement>,
        curtains: &Curtains,
        on_navigate: js_sys::Function,
    ) -> js_sys::Promise {
        let curtains = curtains.inner.clone();
        let navigate: Navigate = Rc::new(move || {
            on_navigate
                .call0(&JsValue::NULL)
                .map(|_| ())
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
        });
        future_to_promise(async move {
            let mounted = screen::mount(MountOptions {
                canvas,
                main_content,
                scroll_hint,
                curtains,
                navigate,
                config: FieldConfig::default(),
            })
            .await
            .map_err(|e| {
                log::error!("mount error: {:?}", e);
                JsValue::from_str(&format!("{:#}", e))
            })?;
            Ok(StartScreen {
                mounted: Some(mounted),
            }
            .into())
        })
    }

    pub fn destroy(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.unmount();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

impl Drop for StartScreen {
    fn drop(&mut self) {
        self.destroy();
    }
}

