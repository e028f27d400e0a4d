// Tuning constants and their relationships.

use field_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ripple_envelope_fits_inside_lifetime() {
    assert!(RIPPLE_FADE_IN_MS + RIPPLE_FADE_OUT_MS <= RIPPLE_MAX_AGE_MS);
    assert!(RIPPLE_DAMPING > 0.0);
    assert!(RIPPLE_CAP > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn curtain_timeline_is_ordered() {
    assert!(CONTENT_FADE_START_SECS < CURTAIN_CLOSE_SECS);
    assert!(CONTENT_FADE_START_SECS + CONTENT_FADE_SECS <= CURTAIN_CLOSE_SECS);
    assert!(NAVIGATE_AT_SECS >= CURTAIN_CLOSE_SECS);
    assert!(REOPEN_AT_SECS > NAVIGATE_AT_SECS);
    assert!(CONTENT_FADED_SCALE > 0.0 && CONTENT_FADED_SCALE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_thresholds_are_ordered() {
    assert!(SCROLL_HINT_HIDE_PROGRESS < CURTAIN_TRIGGER_PROGRESS);
    assert!(CURTAIN_TRIGGER_PROGRESS <= 1.0);
    assert!(WHEEL_SCROLL_FACTOR > 0.0 && TOUCH_SCROLL_FACTOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn text_fits_inside_scatter_ring() {
    let half_diag = (TEXT_EXTENT_X * TEXT_EXTENT_X + TEXT_EXTENT_Y * TEXT_EXTENT_Y).sqrt() * 0.5;
    assert!(TEXT_EXTENT_X * 0.5 < SCATTER_RADIUS_MIN);
    assert!(half_diag < SCATTER_RADIUS_MIN + SCATTER_RADIUS_SPAN);
}

#[test]
fn default_config_uses_the_landing_text() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg.text, TARGET_TEXT);
    assert_eq!(cfg.grid.point_count(), 251 * 201);
    assert!(cfg.seed.is_none());
}
