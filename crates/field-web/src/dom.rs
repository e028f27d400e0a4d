use fnv::FnvHashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

// Returns the CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w_px, h_px) = crate::input::backing_size(rect.width(), rect.height(), dpr);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (rect.width() as f32, rect.height() as f32)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("style {}: {:?}", property, e);
    }
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<(web::EventTarget, &'static str, Closure<dyn FnMut(web::Event)>)>,
}

impl ListenerSet {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        self.add_with_passive(target, kind, true, handler);
    }

    // Non-passive: the handler may call `prevent_default`.
    pub fn add_active(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        self.add_with_passive(target, kind, false, handler);
    }

    fn add_with_passive(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            Ok(()) => self.entries.push((target.clone(), kind, closure)),
            Err(e) => log::error!("add {} listener: {:?}", kind, e),
        }
    }

    pub fn clear(&mut self) {
        for (target, kind, closure) in self.entries.drain(..) {
            let _ = target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.clear();
    }
}

#[derive(Default)]
pub struct TimerSet {
    pending: FnvHashMap<i32, Closure<dyn FnMut()>>,
}

impl TimerSet {
    pub fn set_timeout(&mut self, delay_ms: i32, callback: impl FnOnce() + 'static) {
        let Some(window) = web::window() else {
            return;
        };
        let closure = Closure::once(callback);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            Ok(id) => {
                self.pending.insert(id, closure);
            }
            Err(e) => log::error!("setTimeout: {:?}", e),
        }
    }

    pub fn clear(&mut self) {
        if let Some(window) = web::window() {
            for id in self.pending.keys() {
                window.clear_timeout_with_handle(*id);
            }
        }
        self.pending.clear();
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.clear();
    }
}
