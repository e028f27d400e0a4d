// Ripple lifetime, envelope shape and additive height.

use field_core::*;
use glam::Vec2;

fn ripple_at(start_ms: f64) -> Ripple {
    Ripple {
        origin: Vec2::ZERO,
        start_ms,
        max_age_ms: RIPPLE_MAX_AGE_MS,
    }
}

#[test]
fn ripple_present_before_max_age_and_absent_from_it() {
    let t0 = 12_345.0;
    for now in [t0, t0 + 1.0, t0 + 2000.0, t0 + 3999.0, t0 + 3999.99] {
        let mut set = RippleSet::default();
        set.spawn(Vec2::new(1.0, 1.0), t0);
        set.retain_live(now);
        assert_eq!(set.len(), 1, "missing at {now}");
    }
    for now in [t0 + 4000.0, t0 + 4000.01, t0 + 10_000.0] {
        let mut set = RippleSet::default();
        set.spawn(Vec2::new(1.0, 1.0), t0);
        set.retain_live(now);
        assert!(set.is_empty(), "still present at {now}");
    }
}

#[test]
fn envelope_fades_in_holds_and_fades_out() {
    let p = RippleParams::default();
    let r = ripple_at(0.0);
    assert_eq!(r.envelope(0.0, &p), 0.0);
    assert!((r.envelope(500.0, &p) - 0.5).abs() < 1e-6);
    assert_eq!(r.envelope(1000.0, &p), 1.0);
    assert_eq!(r.envelope(1800.0, &p), 1.0);
    assert!((r.envelope(2900.0, &p) - 0.5).abs() < 1e-6);
    assert_eq!(r.envelope(4000.0, &p), 0.0);
    assert_eq!(r.envelope(5000.0, &p), 0.0);
}

#[test]
fn height_decays_with_distance() {
    let p = RippleParams::default();
    let r = ripple_at(0.0);
    let now = 1500.0;
    let bound = |d: f32| p.amplitude * (-d * p.damping).exp();
    for d in [0.5_f32, 1.0, 3.0, 10.0, 20.0] {
        let h = r.height_at(Vec2::new(d, 0.0), now, &p);
        assert!(h.abs() <= bound(d) + 1e-6);
    }
    assert!(bound(10.0) < 0.002);
}

#[test]
fn heights_from_several_ripples_add_up() {
    let p = RippleParams::default();
    let mut set = RippleSet::new(p.clone());
    set.spawn(Vec2::new(-1.0, 0.0), 0.0);
    set.spawn(Vec2::new(1.5, 0.5), 300.0);
    let now = 1700.0;
    let q = Vec2::new(0.25, 0.1);
    let expected: f32 = set.iter().map(|r| r.height_at(q, now, &p)).sum();
    assert!((set.height_at(q.x, q.y, now) - expected).abs() < 1e-6);
    assert!(expected != 0.0);
}

#[test]
fn cap_evicts_oldest_ripple() {
    let params = RippleParams {
        cap: 3,
        ..RippleParams::default()
    };
    let mut set = RippleSet::new(params);
    for i in 0..5 {
        set.spawn(Vec2::new(i as f32, 0.0), i as f64);
    }
    assert_eq!(set.len(), 3);
    let xs: Vec<f32> = set.iter().map(|r| r.origin.x).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0]);
}

#[test]
fn burst_of_clicks_below_cap_is_kept() {
    let mut set = RippleSet::default();
    for i in 0..RIPPLE_CAP {
        set.spawn(Vec2::new(0.0, i as f32), 0.0);
    }
    assert_eq!(set.len(), RIPPLE_CAP);
    set.retain_live(100.0);
    assert_eq!(set.len(), RIPPLE_CAP);
    set.clear();
    assert!(set.is_empty());
}
