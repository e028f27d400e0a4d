use crate::constants::HIDDEN_CLASS;
use crate::dom::{self, ListenerSet};
use crate::frame::FieldScene;
use crate::input;
use field_core::{css_to_ndc, pick_plane, ScrollOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles passed to every input listener of the start screen.
#[derive(Clone)]
pub struct InputWiring {
    pub scene: Rc<RefCell<FieldScene>>,
    pub scroll_hint: Option<web::HtmlElement>,
    /// Fired once, the first time scroll progress reaches the trigger.
    pub on_trigger: Rc<dyn Fn()>,
}

impl InputWiring {
    fn handle_scroll(&self, outcome: ScrollOutcome) {
        if outcome.hide_hint {
            if let Some(hint) = &self.scroll_hint {
                dom::add_class(hint, HIDDEN_CLASS);
            }
        }
        if outcome.trigger_transition {
            log::info!("[input] scroll complete; activating curtains");
            (self.on_trigger)();
        }
    }
}

/// Attach pointer, wheel, touch, click and resize listeners. `host` receives
/// the scroll and click input; pointer movement and resize come from the
/// window.
pub fn wire_input(
    wiring: &InputWiring,
    window: &web::Window,
    host: &web::EventTarget,
) -> ListenerSet {
    let mut listeners = ListenerSet::default();

    {
        let w = wiring.clone();
        listeners.add(window, "pointermove", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let size = input::viewport_size();
            w.scene.borrow_mut().sim.mouse.set_target_client(
                ev.client_x() as f32,
                ev.client_y() as f32,
                size.x,
                size.y,
            );
        });
    }

    {
        let w = wiring.clone();
        listeners.add_active(host, "wheel", move |ev: web::Event| {
            ev.prevent_default();
            let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            let page_h = input::viewport_size().y as f64;
            let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), page_h);
            let outcome = w.scene.borrow_mut().scroll.apply_wheel(delta);
            w.handle_scroll(outcome);
        });
    }

    {
        let w = wiring.clone();
        listeners.add(host, "touchstart", move |ev: web::Event| {
            let Some(y) = ev.dyn_ref::<web::TouchEvent>().and_then(input::first_touch_y) else {
                return;
            };
            w.scene.borrow_mut().scroll.touch_start(y);
        });
    }

    {
        let w = wiring.clone();
        listeners.add_active(host, "touchmove", move |ev: web::Event| {
            ev.prevent_default();
            let Some(y) = ev.dyn_ref::<web::TouchEvent>().and_then(input::first_touch_y) else {
                return;
            };
            let outcome = w.scene.borrow_mut().scroll.touch_move(y);
            w.handle_scroll(outcome);
        });
    }

    {
        let w = wiring.clone();
        listeners.add(host, "click", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let mut scene = w.scene.borrow_mut();
            let (local, size) = input::pointer_canvas_css(ev, &scene.canvas);
            let ndc = css_to_ndc(local.x, local.y, size.x, size.y);
            let Some(hit) = pick_plane(&scene.camera, ndc) else {
                log::debug!("[input] click at {:?} misses the plane", ndc);
                return;
            };
            let now = scene.now_ms();
            scene.ripples.spawn(hit, now);
        });
    }

    {
        let w = wiring.clone();
        listeners.add(window, "resize", move |_ev: web::Event| {
            w.scene.borrow_mut().sync_viewport();
        });
    }

    listeners
}
