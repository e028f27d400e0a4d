// Curtain choreography: cue order, phases, poses and re-entrancy.

use field_core::*;

/// Poll from `from` to `to` at ~60 Hz and collect every cue with its time.
fn run(ch: &mut Choreographer, from: f64, to: f64) -> Vec<(f64, CurtainCue)> {
    let mut out = Vec::new();
    let mut t = from;
    while t <= to {
        for cue in ch.poll(t) {
            out.push((t, cue));
        }
        t += 1.0 / 60.0;
    }
    out
}

#[test]
fn full_cycle_fires_cues_in_order_once() {
    let mut ch = Choreographer::default();
    assert!(ch.start(10.0));
    let cues: Vec<CurtainCue> = run(&mut ch, 10.0, 14.0).into_iter().map(|(_, c)| c).collect();
    assert_eq!(
        cues,
        vec![
            CurtainCue::Closed,
            CurtainCue::FadedOut,
            CurtainCue::Navigate,
            CurtainCue::Reopen,
            CurtainCue::Opened,
        ]
    );
    assert_eq!(ch.phase(), CurtainPhase::Idle);
    assert!(!ch.is_animating());
}

#[test]
fn cues_fire_at_their_offsets() {
    let mut ch = Choreographer::default();
    ch.start(0.0);
    let tl = CurtainTimeline::default();
    for (t, cue) in run(&mut ch, 0.0, 4.0) {
        let at = tl.cues().iter().find(|(_, c)| *c == cue).unwrap().0 as f64;
        assert!(t >= at - 1e-6 && t < at + 1.0 / 30.0, "{cue:?} fired at {t}, expected {at}");
    }
}

#[test]
fn phases_follow_the_timeline() {
    let mut ch = Choreographer::default();
    assert_eq!(ch.phase(), CurtainPhase::Idle);
    ch.start(0.0);
    ch.poll(0.5);
    assert_eq!(ch.phase(), CurtainPhase::Closing);
    ch.poll(1.2);
    assert_eq!(ch.phase(), CurtainPhase::Hidden);
    ch.poll(2.0);
    assert_eq!(ch.phase(), CurtainPhase::Opening);
    ch.poll(3.01);
    assert_eq!(ch.phase(), CurtainPhase::Idle);
}

#[test]
fn a_late_poll_delivers_every_pending_cue() {
    let mut ch = Choreographer::default();
    ch.start(0.0);
    let cues = ch.poll(100.0);
    assert_eq!(cues.len(), 5);
    assert_eq!(cues[2], CurtainCue::Navigate);
    assert!(ch.poll(200.0).is_empty());
}

#[test]
fn start_is_ignored_while_animating() {
    let mut ch = Choreographer::default();
    assert!(ch.start(0.0));
    let mut navigations = 0;
    let mut t = 0.0;
    while t < 5.0 {
        // hammer the trigger every frame of the cycle
        if t < 2.5 {
            assert!(!ch.start(t));
        }
        navigations += ch
            .poll(t)
            .iter()
            .filter(|c| **c == CurtainCue::Navigate)
            .count();
        t += 1.0 / 60.0;
    }
    assert_eq!(navigations, 1);
    // a finished cycle can be started again
    assert!(ch.start(10.0));
}

#[test]
fn saturated_scroll_navigates_exactly_once() {
    let mut scroll = ScrollState::default();
    let mut ch = Choreographer::default();
    let mut navigations = 0;
    let mut t = 0.0;
    for _ in 0..600 {
        if scroll.apply_wheel(200.0).trigger_transition {
            ch.start(t);
        }
        navigations += ch
            .poll(t)
            .iter()
            .filter(|c| **c == CurtainCue::Navigate)
            .count();
        t += 1.0 / 60.0;
    }
    assert!(scroll.progress() >= CURTAIN_TRIGGER_PROGRESS);
    assert_eq!(navigations, 1);
}

#[test]
fn pose_closes_fades_and_reopens() {
    let mut ch = Choreographer::default();
    assert_eq!(ch.pose(0.0), CurtainPose::OPEN);
    ch.start(0.0);

    let p = ch.pose(0.0);
    assert_eq!((p.left_pct, p.right_pct), (-100.0, 100.0));
    assert_eq!((p.content_opacity, p.content_scale), (1.0, 1.0));

    // fade has not started before 0.5s, curtains already moving
    let p = ch.pose(0.4);
    assert!(p.left_pct > -100.0 && p.left_pct < 0.0);
    assert_eq!(p.content_opacity, 1.0);

    // halfway through the fade the curtains are mostly closed
    let p = ch.pose(0.75);
    assert!(p.content_opacity > 0.0 && p.content_opacity < 1.0);
    assert!(p.content_scale > CONTENT_FADED_SCALE && p.content_scale < 1.0);

    ch.poll(1.0);
    let p = ch.pose(1.0);
    assert_eq!((p.left_pct, p.right_pct), (0.0, 0.0));
    assert_eq!(p.content_opacity, 0.0);
    assert!((p.content_scale - CONTENT_FADED_SCALE).abs() < 1e-6);

    // reopen resets content instantly
    ch.poll(1.8);
    let p = ch.pose(1.8);
    assert_eq!((p.content_opacity, p.content_scale), (1.0, 1.0));
    assert!(p.left_pct.abs() < 1e-3);

    let p = ch.pose(2.4);
    assert!(p.left_pct < 0.0 && p.left_pct > -100.0);
    assert!((p.left_pct + p.right_pct).abs() < 1e-4);

    ch.poll(3.01);
    assert_eq!(ch.pose(3.01), CurtainPose::OPEN);
}

#[test]
fn pose_holds_closed_until_reopen_is_polled() {
    let mut ch = Choreographer::default();
    ch.start(0.0);
    ch.poll(1.5);
    assert_eq!(ch.phase(), CurtainPhase::Hidden);
    let p = ch.pose(2.5);
    assert_eq!((p.left_pct, p.right_pct), (0.0, 0.0));
    assert_eq!(p.content_opacity, 0.0);
}

#[test]
fn open_now_recovers_from_hidden_only() {
    let mut ch = Choreographer::default();
    assert!(!ch.open_now(0.0));
    ch.start(0.0);
    assert!(!ch.open_now(0.5)); // still closing
    ch.poll(1.1);
    assert!(ch.open_now(1.2));
    let cues = ch.poll(1.2);
    assert_eq!(cues.as_slice(), &[CurtainCue::Reopen]);
    assert_eq!(ch.phase(), CurtainPhase::Opening);
    let cues = ch.poll(1.21 + CURTAIN_OPEN_SECS as f64);
    assert_eq!(cues.as_slice(), &[CurtainCue::Opened]);
}

#[test]
fn easing_endpoints_and_symmetry() {
    assert_eq!(ease_power3_in_out(0.0), 0.0);
    assert_eq!(ease_power3_in_out(1.0), 1.0);
    assert!((ease_power3_in_out(0.5) - 0.5).abs() < 1e-6);
    assert_eq!(ease_power3_in_out(-3.0), 0.0);
    assert_eq!(ease_power3_in_out(7.0), 1.0);
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let a = ease_power3_in_out(t);
        let b = ease_power3_in_out(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-5);
    }
}

fn quick_timeline() -> CurtainTimeline {
    CurtainTimeline {
        close_secs: 0.5,
        fade_start_secs: 0.25,
        fade_secs: 0.25,
        faded_scale: 0.8,
        navigate_at_secs: 0.75,
        reopen_at_secs: 1.0,
        open_secs: 0.5,
    }
}

#[test]
fn custom_timeline_moves_navigate_and_reopen() {
    let mut ch = Choreographer::new(quick_timeline());
    ch.start(0.0);
    let fired = run(&mut ch, 0.0, 2.0);
    let at = |cue: CurtainCue| fired.iter().find(|(_, c)| *c == cue).map(|(t, _)| *t).unwrap();
    let nav = at(CurtainCue::Navigate);
    let reopen = at(CurtainCue::Reopen);
    assert!(nav >= 0.75 - 1e-6 && nav < 0.75 + 1.0 / 30.0, "navigate at {nav}");
    assert!(reopen >= 1.0 - 1e-6 && reopen < 1.0 + 1.0 / 30.0, "reopen at {reopen}");
    assert!(at(CurtainCue::Opened) < 1.6);
    assert!(!ch.is_animating());
}

#[test]
fn timeline_swaps_only_between_cycles() {
    let mut ch = Choreographer::default();
    assert!(ch.set_timeline(quick_timeline()));
    assert_eq!(ch.timeline(), &quick_timeline());
    ch.start(0.0);
    assert!(!ch.set_timeline(CurtainTimeline::default()));
    assert_eq!(ch.timeline(), &quick_timeline());
    run(&mut ch, 0.0, 2.0);
    assert!(ch.set_timeline(CurtainTimeline::default()));
    assert_eq!(ch.timeline(), &CurtainTimeline::default());
}
