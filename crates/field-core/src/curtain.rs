//! Curtain transition choreography.
//!
//! Close the curtain panels, fade the canvas and content, navigate while
//! hidden, then reopen after a settle delay. Purely time-driven: the owner
//! polls with a monotonic clock in seconds and applies [`CurtainPose`] to
//! whatever it animates.

use crate::constants::*;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct CurtainTimeline {
    pub close_secs: f32,
    pub fade_start_secs: f32,
    pub fade_secs: f32,
    pub faded_scale: f32,
    pub navigate_at_secs: f32,
    pub reopen_at_secs: f32,
    pub open_secs: f32,
}

impl Default for CurtainTimeline {
    fn default() -> Self {
        Self {
            close_secs: CURTAIN_CLOSE_SECS,
            fade_start_secs: CONTENT_FADE_START_SECS,
            fade_secs: CONTENT_FADE_SECS,
            faded_scale: CONTENT_FADED_SCALE,
            navigate_at_secs: NAVIGATE_AT_SECS,
            reopen_at_secs: REOPEN_AT_SECS,
            open_secs: CURTAIN_OPEN_SECS,
        }
    }
}

impl CurtainTimeline {
    pub fn total_secs(&self) -> f32 {
        self.reopen_at_secs + self.open_secs
    }

    /// Cue offsets in firing order.
    pub fn cues(&self) -> [(f32, CurtainCue); 5] {
        [
            (self.close_secs, CurtainCue::Closed),
            (self.navigate_at_secs, CurtainCue::FadedOut),
            (self.navigate_at_secs, CurtainCue::Navigate),
            (self.reopen_at_secs, CurtainCue::Reopen),
            (self.total_secs(), CurtainCue::Opened),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurtainPhase {
    #[default]
    Idle,
    Closing,
    Hidden,
    Opening,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurtainCue {
    /// Panels fully closed.
    Closed,
    /// Canvas and content faded; the optional caller hook runs here.
    FadedOut,
    /// Hand off to the router.
    Navigate,
    /// Content reset and panels start sliding back.
    Reopen,
    /// Panels offscreen again; the cycle is over.
    Opened,
}

/// Visual state at an instant. Panel offsets are percentages of their own
/// width: left goes -100..0, right 100..0, 0 meaning closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurtainPose {
    pub left_pct: f32,
    pub right_pct: f32,
    pub content_opacity: f32,
    pub content_scale: f32,
}

impl CurtainPose {
    pub const OPEN: CurtainPose = CurtainPose {
        left_pct: -100.0,
        right_pct: 100.0,
        content_opacity: 1.0,
        content_scale: 1.0,
    };

    fn with_closure(closed: f32, fade: f32, faded_scale: f32) -> Self {
        Self {
            left_pct: -100.0 * (1.0 - closed),
            right_pct: 100.0 * (1.0 - closed),
            content_opacity: 1.0 - fade,
            content_scale: 1.0 - (1.0 - faded_scale) * fade,
        }
    }
}

/// Cubic ease-in-out ("power3.inOut").
#[inline]
pub fn ease_power3_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
fn span_progress(elapsed: f32, start: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if elapsed >= start { 1.0 } else { 0.0 };
    }
    ease_power3_in_out((elapsed - start) / duration)
}

#[derive(Clone, Debug, Default)]
pub struct Choreographer {
    timeline: CurtainTimeline,
    phase: CurtainPhase,
    started_at: f64,
    next_cue: usize,
}

impl Choreographer {
    pub fn new(timeline: CurtainTimeline) -> Self {
        Self {
            timeline,
            ..Default::default()
        }
    }

    pub fn timeline(&self) -> &CurtainTimeline {
        &self.timeline
    }

    /// Swap the timeline between cycles. Refused (false) mid-cycle.
    pub fn set_timeline(&mut self, timeline: CurtainTimeline) -> bool {
        if self.is_animating() {
            return false;
        }
        self.timeline = timeline;
        true
    }

    pub fn phase(&self) -> CurtainPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase != CurtainPhase::Idle
    }

    /// Begin a cycle. Ignored (returns false) while a cycle is in flight.
    pub fn start(&mut self, now_s: f64) -> bool {
        if self.is_animating() {
            return false;
        }
        self.phase = CurtainPhase::Closing;
        self.started_at = now_s;
        self.next_cue = 0;
        true
    }

    /// Reopen immediately from the hidden phase, skipping any cue before
    /// `Reopen` that has not fired yet. Used to recover after a failed
    /// navigation. Returns false in any other phase.
    pub fn open_now(&mut self, now_s: f64) -> bool {
        if self.phase != CurtainPhase::Hidden {
            return false;
        }
        self.started_at = now_s - self.timeline.reopen_at_secs as f64;
        self.next_cue = self
            .timeline
            .cues()
            .iter()
            .position(|(_, c)| *c == CurtainCue::Reopen)
            .unwrap_or(0);
        true
    }

    /// Cues due at `now_s`, in order, each delivered once.
    pub fn poll(&mut self, now_s: f64) -> SmallVec<[CurtainCue; 5]> {
        let mut due = SmallVec::new();
        if !self.is_animating() {
            return due;
        }
        let elapsed = (now_s - self.started_at) as f32;
        let cues = self.timeline.cues();
        while let Some(&(at, cue)) = cues.get(self.next_cue) {
            if at > elapsed {
                break;
            }
            self.next_cue += 1;
            self.phase = match cue {
                CurtainCue::Closed => CurtainPhase::Hidden,
                CurtainCue::Reopen => CurtainPhase::Opening,
                CurtainCue::Opened => CurtainPhase::Idle,
                CurtainCue::FadedOut | CurtainCue::Navigate => self.phase,
            };
            due.push(cue);
        }
        due
    }

    /// Interpolated pose at `now_s`.
    pub fn pose(&self, now_s: f64) -> CurtainPose {
        if !self.is_animating() {
            return CurtainPose::OPEN;
        }
        let tl = &self.timeline;
        let elapsed = (now_s - self.started_at) as f32;
        if elapsed < tl.reopen_at_secs && self.phase != CurtainPhase::Opening {
            let closed = span_progress(elapsed, 0.0, tl.close_secs);
            let fade = span_progress(elapsed, tl.fade_start_secs, tl.fade_secs);
            CurtainPose::with_closure(closed, fade, tl.faded_scale)
        } else if self.phase != CurtainPhase::Opening {
            // Held closed until the reopen cue is polled.
            CurtainPose::with_closure(1.0, 1.0, tl.faded_scale)
        } else {
            let opened = span_progress(elapsed, tl.reopen_at_secs, tl.open_secs);
            CurtainPose::with_closure(1.0 - opened, 0.0, tl.faded_scale)
        }
    }
}
