// Host-side tests for the pure browser helpers.
// The crate itself is wasm-only, so the modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn backing_size_scales_by_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 1.5), (1200, 900));
}

#[test]
fn backing_size_caps_pixel_ratio_at_two() {
    assert_eq!(backing_size(800.0, 600.0, 3.0), (1600, 1200));
}

#[test]
fn backing_size_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-5.0, 10.0, 1.0), (1, 10));
}

#[test]
fn backing_size_ignores_bogus_ratio() {
    assert_eq!(backing_size(100.0, 50.0, f64::NAN), (100, 50));
    assert_eq!(backing_size(100.0, 50.0, 0.0), (100, 50));
}

#[test]
fn backing_size_is_stable_for_repeated_calls() {
    let a = backing_size(1280.0, 720.0, 2.0);
    let b = backing_size(1280.0, 720.0, 2.0);
    assert_eq!(a, b);
}

#[test]
fn wheel_pixels_pass_through() {
    assert_eq!(wheel_delta_px(120.0, DELTA_PIXEL, 900.0), 120.0);
    assert_eq!(wheel_delta_px(-40.0, DELTA_PIXEL, 900.0), -40.0);
}

#[test]
fn wheel_lines_and_pages_become_pixels() {
    assert_eq!(wheel_delta_px(3.0, DELTA_LINE, 900.0), 48.0);
    assert_eq!(wheel_delta_px(1.0, DELTA_PAGE, 900.0), 900.0);
}

#[test]
fn client_position_is_relative_to_box() {
    let p = client_to_local(150.0, 80.0, 100.0, 30.0);
    assert_eq!(p, glam::Vec2::new(50.0, 50.0));
}
