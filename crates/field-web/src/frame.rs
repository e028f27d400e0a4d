use crate::dom;
use crate::render::PointRenderer;
use field_core::{Camera, FieldSimulator, PointCloud, RippleSet, ScrollState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = RefCell<Option<Closure<dyn FnMut()>>>;

/// A requestAnimationFrame loop that can be stopped from outside.
///
/// The tick returns whether to keep running. `cancel` (or dropping the loop)
/// cancels the pending frame and releases the closure; it must not be called
/// from inside the loop's own tick, which should return `false` instead.
pub struct AnimationLoop {
    handle: Rc<Cell<Option<i32>>>,
    slot: Rc<TickSlot>,
}

impl AnimationLoop {
    pub fn start(mut tick: impl FnMut() -> bool + 'static) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let slot: Rc<TickSlot> = Rc::new(RefCell::new(None));
        let handle_tick = handle.clone();
        let slot_tick: Weak<TickSlot> = Rc::downgrade(&slot);
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if !tick() {
                return;
            }
            if let Some(slot) = slot_tick.upgrade() {
                handle_tick.set(request_frame(&slot));
            }
        }) as Box<dyn FnMut()>));
        handle.set(request_frame(&slot));
        Self { handle, slot }
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.slot.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(slot: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let guard = slot.borrow();
    let closure = guard.as_ref()?;
    match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame: {:?}", e);
            None
        }
    }
}

pub struct FieldScene {
    pub canvas: web::HtmlCanvasElement,
    pub cloud: PointCloud,
    pub sim: FieldSimulator,
    pub ripples: RippleSet,
    pub scroll: ScrollState,
    pub camera: Camera,
    pub renderer: PointRenderer,
    pub epoch: Instant,
}

impl FieldScene {
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    pub fn sync_viewport(&mut self) {
        let (css_w, css_h) = dom::sync_canvas_backing_size(&self.canvas);
        if self.camera.set_viewport(css_w as u32, css_h as u32) {
            log::debug!("[frame] viewport {}x{}", css_w, css_h);
        }
        self.renderer
            .resize_if_needed(self.canvas.width(), self.canvas.height());
    }

    pub fn frame(&mut self) {
        let now_ms = self.now_ms();
        let progress = self.scroll.progress();
        self.sim
            .step(&self.cloud, &mut self.ripples, progress, now_ms);
        if self.sim.take_dirty() {
            self.renderer.upload_positions(self.sim.positions());
        }
        self.renderer.render_or_recover(&self.camera);
    }
}

pub fn start_field_loop(scene: Rc<RefCell<FieldScene>>) -> AnimationLoop {
    AnimationLoop::start(move || {
        scene.borrow_mut().frame();
        true
    })
}
