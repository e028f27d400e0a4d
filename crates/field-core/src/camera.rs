//! Camera and ground-plane picking.
//!
//! The point grid is built in plane-local coordinates (x right, y up, height
//! along z) and drawn inside a group rotated -90° about X, so the plane lies
//! flat on the world y = 0 ground with height pointing toward the camera. The
//! camera hovers above the origin looking straight down, with world -Z as
//! screen-up so plane-local +y reads as "up" on screen.

use crate::constants::{camera_eye, CAMERA_FOV_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed camera with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye(),
            target: Vec3::ZERO,
            up: Vec3::NEG_Z,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio for a viewport. Returns false when nothing
    /// changed, so repeated calls with the same size are no-ops.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let aspect = width as f32 / height as f32;
        if aspect == self.aspect {
            return false;
        }
        self.aspect = aspect;
        true
    }

    /// World-space ray through a normalized device coordinate in [-1, 1]².
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize(),
        }
    }

    /// Project a world point to NDC. None when behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        (clip.w > 0.0).then(|| Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Intersect with the world y = 0 plane. None for parallel rays or hits
    /// behind the origin.
    #[inline]
    pub fn intersect_ground(&self) -> Option<Vec3> {
        if self.dir.y.abs() < 1e-6 {
            return None;
        }
        let t = -self.origin.y / self.dir.y;
        (t >= 0.0).then(|| self.origin + self.dir * t)
    }
}

/// Model matrix of the point group: -90° about X.
#[inline]
pub fn plane_model_matrix() -> Mat4 {
    Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2)
}

/// Plane-local point to world space.
#[inline]
pub fn plane_to_world(local: Vec3) -> Vec3 {
    Vec3::new(local.x, local.z, -local.y)
}

/// World hit on the ground plane to plane-local (x, y).
#[inline]
pub fn ground_to_plane(world: Vec3) -> Vec2 {
    // Inverse of the -90° X rotation: plane +y lies along world -z.
    Vec2::new(world.x, -world.z)
}

/// Canvas-relative pixel position to NDC, y up.
#[inline]
pub fn css_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

/// Cast a screen position onto the plane. Used by click-to-ripple.
pub fn pick_plane(camera: &Camera, ndc: Vec2) -> Option<Vec2> {
    camera
        .ray_from_ndc(ndc)
        .intersect_ground()
        .map(ground_to_plane)
}
