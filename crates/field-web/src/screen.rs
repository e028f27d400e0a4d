use crate::constants::VISIBLE_CLASS;
use crate::curtains::{CurtainService, Hook};
use crate::dom::{self, ListenerSet, TimerSet};
use crate::events::{self, InputWiring};
use crate::frame::{self, AnimationLoop, FieldScene};
use crate::render::PointRenderer;
use crate::text::CanvasTextRasterizer;
use field_core::constants::CONTENT_REVEAL_DELAY_MS;
use field_core::{Camera, FieldConfig, FieldSimulator, PointCloud, RippleSet, ScrollState};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Navigate = Rc<dyn Fn() -> anyhow::Result<()>>;

/// The landing screen while mounted. Dropping it stops the frame loop,
/// removes listeners, cancels the reveal timer and releases GPU resources.
pub struct MountedScreen {
    // Field order is drop order: stop callbacks before the scene goes.
    frame_loop: AnimationLoop,
    listeners: ListenerSet,
    timers: TimerSet,
    _scene: Rc<RefCell<FieldScene>>,
}

pub struct MountOptions {
    pub canvas: web::HtmlCanvasElement,
    pub main_content: web::HtmlElement,
    pub scroll_hint: Option<web::HtmlElement>,
    pub curtains: Rc<RefCell<CurtainService>>,
    pub navigate: Navigate,
    pub config: FieldConfig,
}

pub async fn mount(opts: MountOptions) -> anyhow::Result<MountedScreen> {
    let MountOptions {
        canvas,
        main_content,
        scroll_hint,
        curtains,
        navigate,
        config,
    } = opts;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let (css_w, css_h) = dom::sync_canvas_backing_size(&canvas);
    let mut camera = Camera::default();
    camera.set_viewport(css_w as u32, css_h as u32);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut rasterizer = CanvasTextRasterizer::default();
    let cloud = PointCloud::from_text(
        &config.grid,
        &config.text,
        &mut rasterizer,
        &config.style,
        &config.sample,
        &config.scatter,
        &mut rng,
    )?;
    let sim = FieldSimulator::new(&cloud);
    let renderer = PointRenderer::new(&canvas, sim.positions()).await?;

    {
        let mut service = curtains.borrow_mut();
        service.set_timeline(config.curtains.clone());
        service.set_canvas_and_content(
            canvas.clone().unchecked_into::<web::HtmlElement>(),
            main_content.clone(),
        );
    }

    let scene = Rc::new(RefCell::new(FieldScene {
        canvas: canvas.clone(),
        cloud,
        sim,
        ripples: RippleSet::new(config.ripple.clone()),
        scroll: ScrollState::default(),
        camera,
        renderer,
        epoch: Instant::now(),
    }));

    let on_trigger: Rc<dyn Fn()> = {
        let curtains = curtains.clone();
        Rc::new(move || {
            let navigate = navigate.clone();
            let hook: Hook = Box::new(move || navigate());
            CurtainService::close_curtains(&curtains, hook, None);
        })
    };
    let wiring = InputWiring {
        scene: scene.clone(),
        scroll_hint,
        on_trigger,
    };
    let host: web::EventTarget = match canvas.parent_element() {
        Some(parent) => parent.into(),
        None => canvas.clone().into(),
    };
    let listeners = events::wire_input(&wiring, &window, &host);

    let mut timers = TimerSet::default();
    timers.set_timeout(CONTENT_REVEAL_DELAY_MS, move || {
        dom::add_class(&main_content, VISIBLE_CLASS);
    });

    let frame_loop = frame::start_field_loop(scene.clone());
    log::info!(
        "[screen] mounted: {} particles, {} listeners",
        scene.borrow().cloud.len(),
        listeners.len()
    );
    Ok(MountedScreen {
        frame_loop,
        listeners,
        timers,
        _scene: scene,
    })
}

impl MountedScreen {
    pub fn unmount(mut self) {
        self.frame_loop.cancel();
        self.listeners.clear();
        self.timers.clear();
        log::info!("[screen] destroyed");
    }
}
