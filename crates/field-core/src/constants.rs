use glam::Vec3;

// Shared tuning constants for the landing-screen particle field.

// Plane grid (plane-local units)
pub const PLANE_WIDTH: f32 = 40.0;
pub const PLANE_HEIGHT: f32 = 30.0;
pub const PLANE_SUBDIV_X: u32 = 250;
pub const PLANE_SUBDIV_Y: u32 = 200;

// Text target
pub const TARGET_TEXT: &str = "JCV CODE";
pub const TEXT_RASTER_SIZE: u32 = 512; // square offscreen raster, px
pub const TEXT_FONT: &str = "bold 80px Arial";
pub const TEXT_STROKE_WIDTH: f64 = 3.0;
pub const TEXT_SAMPLE_STRIDE: usize = 3; // raster px between samples
pub const TEXT_ALPHA_THRESHOLD: u8 = 128; // keep pixels strictly above this
pub const TEXT_EXTENT_X: f32 = 10.0; // world width the raster maps onto
pub const TEXT_EXTENT_Y: f32 = 8.0; // world height the raster maps onto

// Peripheral scatter for particles the outline cannot use
pub const SCATTER_RADIUS_MIN: f32 = 6.0;
pub const SCATTER_RADIUS_SPAN: f32 = 2.0;
pub const SCATTER_Y_SQUASH: f32 = 0.6;
pub const SCATTER_DEPTH: f32 = 2.0; // z spread, centred on 0

// Simulation clock and pointer easing
pub const TIME_STEP: f32 = 0.03; // per frame, not per second
pub const MOUSE_EASE: f32 = 0.04;

// Click ripples
pub const RIPPLE_MAX_AGE_MS: f64 = 4000.0;
pub const RIPPLE_FADE_IN_MS: f64 = 1000.0;
pub const RIPPLE_FADE_OUT_MS: f64 = 2200.0;
pub const RIPPLE_AMPLITUDE: f32 = 0.7;
pub const RIPPLE_FREQUENCY: f32 = 4.0; // radians per world unit
pub const RIPPLE_SPEED: f32 = 2.0; // radians per second
pub const RIPPLE_DAMPING: f32 = 0.6; // exp(-d * damping)
pub const RIPPLE_CAP: usize = 32; // oldest evicted past this

// Scroll input
pub const WHEEL_SCROLL_FACTOR: f32 = 0.0015; // progress per deltaY unit
pub const TOUCH_SCROLL_FACTOR: f32 = 0.0018; // progress per px dragged
pub const SCROLL_HINT_HIDE_PROGRESS: f32 = 0.05;
pub const CURTAIN_TRIGGER_PROGRESS: f32 = 0.99;

// Camera (looks straight down at the plane)
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_HEIGHT: f32 = 10.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Point material
pub const POINT_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
pub const POINT_SIZE: f32 = 0.015;
pub const POINT_OPACITY: f32 = 0.95;
pub const SPRITE_SIZE: u32 = 32; // radial gradient sprite, px
pub const FOG_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const FOG_NEAR: f32 = 25.0;
pub const FOG_FAR: f32 = 50.0;

// Curtain timeline (seconds from trigger)
pub const CURTAIN_CLOSE_SECS: f32 = 1.0;
pub const CONTENT_FADE_START_SECS: f32 = 0.5;
pub const CONTENT_FADE_SECS: f32 = 0.5;
pub const CONTENT_FADED_SCALE: f32 = 0.9;
pub const NAVIGATE_AT_SECS: f32 = 1.5;
pub const REOPEN_AT_SECS: f32 = 1.8; // settle delay for the new route
pub const CURTAIN_OPEN_SECS: f32 = 1.2;

// Start screen reveal
pub const CONTENT_REVEAL_DELAY_MS: i32 = 300;

#[inline]
pub fn camera_eye() -> Vec3 {
    Vec3::new(0.0, CAMERA_HEIGHT, 0.0)
}
