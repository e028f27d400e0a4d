//! Per-frame field simulation: ambient waves plus ripples, blended toward
//! the text targets by scroll progress.

use crate::cloud::PointCloud;
use crate::constants::{MOUSE_EASE, TIME_STEP};
use crate::interaction::MouseEase;
use crate::ripple::RippleSet;
use glam::Vec3;

/// Gentle surface undulation for a base point at clock `t`.
///
/// Returns (lateral x, lateral y, height).
#[inline]
pub fn ambient_offset(x: f32, y: f32, t: f32) -> Vec3 {
    let height = (x * 0.8 + t).sin() * 0.15 + (x * 1.5 + t * 0.7).sin() * 0.08;
    let dx = (y * 0.6 + t * 0.8).sin() * 0.1 + (y * 1.2 + t * 0.5).cos() * 0.05;
    let dy = ((x + y) * 0.4 + t * 0.6).sin() * 0.1;
    Vec3::new(dx, dy, height)
}

/// Resting position plus ambient and ripple displacement.
#[inline]
pub fn plane_position(x: f32, y: f32, t: f32, ripple_height: f32) -> Vec3 {
    let w = ambient_offset(x, y, t);
    Vec3::new(x + w.x, y + w.y, w.z + ripple_height)
}

/// Blend plane toward target; exact at both endpoints.
#[inline]
pub fn lerp_point(plane: Vec3, target: Vec3, progress: f32) -> Vec3 {
    plane * (1.0 - progress) + target * progress
}

/// Owns the clock and the per-frame position buffer.
#[derive(Clone, Debug)]
pub struct FieldSimulator {
    time: f32,
    time_step: f32,
    mouse_ease: f32,
    pub mouse: MouseEase,
    positions: Vec<f32>,
    dirty: bool,
}

impl FieldSimulator {
    /// Starts with the resting grid so the first upload is valid.
    pub fn new(cloud: &PointCloud) -> Self {
        Self {
            time: 0.0,
            time_step: TIME_STEP,
            mouse_ease: MOUSE_EASE,
            mouse: MouseEase::default(),
            positions: cloud.base().to_vec(),
            dirty: true,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// True once per new frame of positions.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Advance one frame. `progress` must already be clamped to [0, 1].
    pub fn step(&mut self, cloud: &PointCloud, ripples: &mut RippleSet, progress: f32, now_ms: f64) {
        self.time += self.time_step;
        self.mouse.ease(self.mouse_ease);
        ripples.retain_live(now_ms);
        self.compute(cloud, ripples, progress, now_ms);
    }

    /// Write positions for the current clock without advancing it.
    pub fn compute(&mut self, cloud: &PointCloud, ripples: &RippleSet, progress: f32, now_ms: f64) {
        let t = self.time;
        let base = cloud.base();
        let target = cloud.target();
        let has_ripples = !ripples.is_empty();
        for ((out, b), tg) in self
            .positions
            .chunks_exact_mut(3)
            .zip(base.chunks_exact(3))
            .zip(target.chunks_exact(3))
        {
            let ripple_h = if has_ripples {
                ripples.height_at(b[0], b[1], now_ms)
            } else {
                0.0
            };
            let plane = plane_position(b[0], b[1], t, ripple_h);
            let p = lerp_point(plane, Vec3::new(tg[0], tg[1], tg[2]), progress);
            out[0] = p.x;
            out[1] = p.y;
            out[2] = p.z;
        }
        self.dirty = true;
    }
}
