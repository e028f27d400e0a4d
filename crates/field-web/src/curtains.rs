use crate::dom::set_style;
use crate::frame::AnimationLoop;
use field_core::{Choreographer, CurtainCue, CurtainPhase, CurtainPose, CurtainTimeline};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub type Hook = Box<dyn FnOnce() -> anyhow::Result<()>>;

#[derive(Default)]
struct Panels {
    left: Option<web::HtmlElement>,
    right: Option<web::HtmlElement>,
    canvas: Option<web::HtmlElement>,
    content: Option<web::HtmlElement>,
}

impl Panels {
    fn apply_curtains(&self, pose: &CurtainPose) {
        if let Some(el) = &self.left {
            set_style(el, "transform", &format!("translateX({}%)", pose.left_pct));
        }
        if let Some(el) = &self.right {
            set_style(el, "transform", &format!("translateX({}%)", pose.right_pct));
        }
    }

    fn apply(&self, pose: &CurtainPose) {
        self.apply_curtains(pose);
        let opacity = pose.content_opacity.to_string();
        let transform = format!("scale({})", pose.content_scale);
        for el in [&self.canvas, &self.content].into_iter().flatten() {
            set_style(el, "opacity", &opacity);
            set_style(el, "transform", &transform);
        }
    }
}

/// Page-level curtain transition; outlives the screens that trigger it.
pub struct CurtainService {
    panels: Panels,
    choreo: Choreographer,
    epoch: Instant,
    on_faded_out: Option<Hook>,
    on_navigate: Option<Hook>,
    driver: Option<AnimationLoop>,
}

impl CurtainService {
    pub fn new(timeline: CurtainTimeline) -> Self {
        Self {
            panels: Panels::default(),
            choreo: Choreographer::new(timeline),
            epoch: Instant::now(),
            on_faded_out: None,
            on_navigate: None,
            driver: None,
        }
    }

    fn now_s(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    pub fn is_animating(&self) -> bool {
        self.choreo.is_animating()
    }

    /// Takes effect from the next cycle; ignored while one is running.
    pub fn set_timeline(&mut self, timeline: CurtainTimeline) {
        if !self.choreo.set_timeline(timeline) {
            log::debug!("[curtains] timeline change ignored mid-cycle");
        }
    }

    /// Parks the panels offscreen.
    pub fn set_curtain_elements(
        &mut self,
        left: web::HtmlElement,
        right: web::HtmlElement,
        canvas: Option<web::HtmlElement>,
        content: Option<web::HtmlElement>,
    ) {
        self.panels.left = Some(left);
        self.panels.right = Some(right);
        self.panels.canvas = canvas;
        self.panels.content = content;
        self.panels.apply_curtains(&CurtainPose::OPEN);
    }

    pub fn set_canvas_and_content(&mut self, canvas: web::HtmlElement, content: web::HtmlElement) {
        self.panels.canvas = Some(canvas);
        self.panels.content = Some(content);
    }

    pub fn close_curtains(
        service: &Rc<RefCell<Self>>,
        on_navigate: Hook,
        on_faded_out: Option<Hook>,
    ) -> bool {
        {
            let mut s = service.borrow_mut();
            let now = s.now_s();
            if !s.choreo.start(now) {
                log::debug!("[curtains] cycle already running; ignored");
                return false;
            }
            s.on_navigate = Some(on_navigate);
            s.on_faded_out = on_faded_out;
            log::info!("[curtains] closing");
        }
        Self::drive(service);
        true
    }

    /// Slide the panels back open. From the hidden phase this resumes the
    /// cycle at its reopen cue (recovery after a failed navigation); when
    /// idle it snaps canvas, content and panels to the open pose.
    pub fn open_curtains(service: &Rc<RefCell<Self>>) {
        let resumed = {
            let mut s = service.borrow_mut();
            if s.panels.left.is_none() || s.panels.right.is_none() {
                return;
            }
            match s.choreo.phase() {
                CurtainPhase::Hidden => {
                    let now = s.now_s();
                    s.on_faded_out = None;
                    s.on_navigate = None;
                    s.choreo.open_now(now)
                }
                CurtainPhase::Idle => {
                    s.panels.apply(&CurtainPose::OPEN);
                    false
                }
                CurtainPhase::Closing | CurtainPhase::Opening => false,
            }
        };
        if resumed {
            Self::drive(service);
        }
    }

    fn drive(service: &Rc<RefCell<Self>>) {
        let weak = Rc::downgrade(service);
        let driver = AnimationLoop::start(move || Self::tick(&weak));
        service.borrow_mut().driver = Some(driver);
    }

    fn tick(weak: &Weak<RefCell<Self>>) -> bool {
        let Some(service) = weak.upgrade() else {
            return false;
        };
        let (cues, mut faded, mut navigate) = {
            let mut s = service.borrow_mut();
            let now = s.now_s();
            let cues = s.choreo.poll(now);
            let pose = s.choreo.pose(now);
            s.panels.apply(&pose);
            let navigating = cues.contains(&CurtainCue::Navigate);
            let faded = if navigating { s.on_faded_out.take() } else { None };
            let navigate = if navigating { s.on_navigate.take() } else { None };
            (cues, faded, navigate)
        };
        // Hooks run without the service borrowed; they may call back into it.
        for cue in &cues {
            match cue {
                CurtainCue::Closed => log::debug!("[curtains] closed"),
                CurtainCue::FadedOut => {
                    if let Some(hook) = faded.take() {
                        if let Err(e) = hook() {
                            log::error!("[curtains] fade hook failed: {:?}", e);
                        }
                    }
                }
                CurtainCue::Navigate => {
                    if let Some(hook) = navigate.take() {
                        log::info!("[curtains] navigating");
                        if let Err(e) = hook() {
                            log::error!("[curtains] navigation failed, holding closed: {:?}", e);
                            return false;
                        }
                    }
                }
                CurtainCue::Reopen => log::debug!("[curtains] reopening"),
                CurtainCue::Opened => log::info!("[curtains] opened"),
            }
        }
        service.borrow().is_animating()
    }
}
