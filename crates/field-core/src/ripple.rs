//! Click ripples: transient circular wavefronts on the plane.

use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct RippleParams {
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
    pub damping: f32,
    pub fade_in_ms: f64,
    pub fade_out_ms: f64,
    pub max_age_ms: f64,
    pub cap: usize,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            amplitude: RIPPLE_AMPLITUDE,
            frequency: RIPPLE_FREQUENCY,
            speed: RIPPLE_SPEED,
            damping: RIPPLE_DAMPING,
            fade_in_ms: RIPPLE_FADE_IN_MS,
            fade_out_ms: RIPPLE_FADE_OUT_MS,
            max_age_ms: RIPPLE_MAX_AGE_MS,
            cap: RIPPLE_CAP,
        }
    }
}

/// One wave source, in plane-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: Vec2,
    pub start_ms: f64,
    pub max_age_ms: f64,
}

impl Ripple {
    #[inline]
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.start_ms
    }

    #[inline]
    pub fn is_live(&self, now_ms: f64) -> bool {
        self.age_ms(now_ms) < self.max_age_ms
    }

    /// Linear fade in, plateau, linear fade out; never negative.
    pub fn envelope(&self, age_ms: f64, params: &RippleParams) -> f32 {
        let fade_out_start = self.max_age_ms - params.fade_out_ms;
        let e = if age_ms < params.fade_in_ms {
            age_ms / params.fade_in_ms
        } else if age_ms > fade_out_start {
            1.0 - (age_ms - fade_out_start) / params.fade_out_ms
        } else {
            1.0
        };
        e.max(0.0) as f32
    }

    /// Height contribution at a plane point.
    #[inline]
    pub fn height_at(&self, point: Vec2, now_ms: f64, params: &RippleParams) -> f32 {
        let age_ms = self.age_ms(now_ms);
        let envelope = self.envelope(age_ms, params);
        if envelope == 0.0 {
            return 0.0;
        }
        let distance = point.distance(self.origin);
        let age_s = (age_ms / 1000.0) as f32;
        envelope
            * params.amplitude
            * (-distance * params.damping).exp()
            * (distance * params.frequency - age_s * params.speed).sin()
    }
}

/// Live ripples in spawn order. Bounded by natural expiry and `params.cap`.
#[derive(Clone, Debug, Default)]
pub struct RippleSet {
    ripples: SmallVec<[Ripple; 8]>,
    params: RippleParams,
}

impl RippleSet {
    pub fn new(params: RippleParams) -> Self {
        Self {
            ripples: SmallVec::new(),
            params,
        }
    }

    /// Add a ripple born now. Evicts the oldest when the cap is reached.
    pub fn spawn(&mut self, origin: Vec2, now_ms: f64) {
        if self.params.cap > 0 && self.ripples.len() >= self.params.cap {
            self.ripples.remove(0);
        }
        self.ripples.push(Ripple {
            origin,
            start_ms: now_ms,
            max_age_ms: self.params.max_age_ms,
        });
        log::debug!(
            "[ripple] spawned at ({:.2}, {:.2}); live={}",
            origin.x,
            origin.y,
            self.ripples.len()
        );
    }

    /// Drop ripples whose age has reached their max age.
    pub fn retain_live(&mut self, now_ms: f64) {
        self.ripples.retain(|r| r.is_live(now_ms));
    }

    /// Summed height of every ripple at a plane point.
    #[inline]
    pub fn height_at(&self, x: f32, y: f32, now_ms: f64) -> f32 {
        let p = Vec2::new(x, y);
        self.ripples
            .iter()
            .map(|r| r.height_at(p, now_ms, &self.params))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }
}
