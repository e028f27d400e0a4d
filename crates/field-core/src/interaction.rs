//! Scroll progress and pointer state fed by wheel, touch and mouse input.

use crate::constants::*;
use glam::Vec2;

/// What a scroll update asks the front end to do.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOutcome {
    pub progress: f32,
    /// Progress passed the hint threshold; the front end hides the hint.
    pub hide_hint: bool,
    /// First time progress reached the trigger; fires at most once.
    pub trigger_transition: bool,
}

/// Scroll progress in [0, 1] plus the one-shot curtain latch.
#[derive(Clone, Debug, Default)]
pub struct ScrollState {
    progress: f32,
    touch_start_y: f32,
    curtains_activated: bool,
}

impl ScrollState {
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn curtains_activated(&self) -> bool {
        self.curtains_activated
    }

    /// Wheel `deltaY` in CSS pixels.
    pub fn apply_wheel(&mut self, delta_y: f32) -> ScrollOutcome {
        self.apply_delta(delta_y * WHEEL_SCROLL_FACTOR)
    }

    pub fn touch_start(&mut self, client_y: f32) {
        self.touch_start_y = client_y;
    }

    /// Dragging up (decreasing y) advances progress.
    pub fn touch_move(&mut self, client_y: f32) -> ScrollOutcome {
        let delta = (self.touch_start_y - client_y) * TOUCH_SCROLL_FACTOR;
        self.touch_start_y = client_y;
        self.apply_delta(delta)
    }

    /// Add a progress delta, clamped to [0, 1]. Non-finite deltas are ignored.
    pub fn apply_delta(&mut self, delta: f32) -> ScrollOutcome {
        if delta.is_finite() {
            self.progress = (self.progress + delta).clamp(0.0, 1.0);
        }
        let trigger = self.progress >= CURTAIN_TRIGGER_PROGRESS && !self.curtains_activated;
        if trigger {
            self.curtains_activated = true;
        }
        ScrollOutcome {
            progress: self.progress,
            hide_hint: self.progress > SCROLL_HINT_HIDE_PROGRESS,
            trigger_transition: trigger,
        }
    }
}

/// Pointer position in NDC, eased toward the latest target each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseEase {
    pub target: Vec2,
    pub current: Vec2,
}

impl MouseEase {
    /// Window client coordinates to NDC target.
    pub fn set_target_client(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.target = Vec2::new(
                (client_x / width) * 2.0 - 1.0,
                -(client_y / height) * 2.0 + 1.0,
            );
        }
    }

    #[inline]
    pub fn ease(&mut self, factor: f32) {
        self.current += (self.target - self.current) * factor;
    }
}
