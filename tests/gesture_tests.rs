// Host-side tests for gesture classification, pan clamping and the input normalizer.
// The main crate is wasm-only, so the pure core modules are included via `common`.

#![allow(dead_code)]
mod common;

use common::core::gesture::*;
use glam::Vec2;

#[test]
fn swipe_needs_distance_and_speed() {
    assert_eq!(classify_swipe(-150.0, 300.0), Some(SwipeDirection::Left));
    assert_eq!(classify_swipe(150.0, 300.0), Some(SwipeDirection::Right));
    // Too short
    assert_eq!(classify_swipe(100.0, 300.0), None);
    assert_eq!(classify_swipe(120.0, 100.0), None);
    assert_eq!(classify_swipe(-120.0, 100.0), None);
    // Too slow
    assert_eq!(classify_swipe(-150.0, 500.0), None);
    assert_eq!(classify_swipe(400.0, 900.0), None);
}

#[test]
fn tracker_classifies_from_last_tracked_position() {
    let mut t = SwipeTracker::default();
    t.begin(300.0, 1000.0);
    assert!(t.is_active());
    t.track(250.0);
    t.track(150.0);
    assert_eq!(t.finish(1300.0), Some(SwipeDirection::Left));
    assert!(!t.is_active());
    // Already finished
    assert_eq!(t.finish(1310.0), None);
}

#[test]
fn tap_is_not_a_swipe() {
    let mut t = SwipeTracker::default();
    t.begin(300.0, 0.0);
    assert_eq!(t.finish(80.0), None);

    // Moves without a touch in progress are ignored.
    let mut t = SwipeTracker::default();
    t.track(900.0);
    assert_eq!(t.finish(10.0), None);
}

#[test]
fn tilt_sign_maps_to_direction() {
    assert_eq!(classify_tilt(12.5), Some(TiltDirection::Forward));
    assert_eq!(classify_tilt(-3.0), Some(TiltDirection::Backward));
    assert_eq!(classify_tilt(0.0), None);
}

#[test]
fn max_pan_has_a_floor() {
    assert_eq!(max_pan_for(400.0), 400.0);
    assert_eq!(max_pan_for(800.0), 600.0);
    assert_eq!(max_pan_for(1600.0), 1200.0);
}

#[test]
fn pan_is_clamped_after_every_update() {
    let mut pan = PanState::new(800.0);
    let max = pan.max_pan();
    assert_eq!(max, 600.0);

    // Deterministic pseudo-random drag deltas, including large jumps.
    let mut seed: u32 = 0x2545_f491;
    let mut x = 0.0_f32;
    pan.begin_drag(x);
    for i in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let delta = (seed % 2001) as f32 - 1000.0;
        x += delta;
        let off = pan.drag_to(x).unwrap();
        assert!(off >= -max && off <= max, "offset {} out of bounds", off);
        if i % 37 == 0 {
            pan.end_drag();
            pan.begin_drag(x);
        }
    }
}

#[test]
fn pan_saturates_at_bounds() {
    let mut pan = PanState::new(800.0);
    pan.begin_drag(0.0);
    assert_eq!(pan.drag_to(1000.0), Some(600.0));
    assert_eq!(pan.drag_to(-5000.0), Some(-600.0));
}

#[test]
fn pan_offset_persists_between_drags() {
    let mut pan = PanState::new(1000.0);
    pan.begin_drag(500.0);
    assert_eq!(pan.drag_to(400.0), Some(-100.0));
    pan.end_drag();
    assert!(!pan.is_dragging());
    assert_eq!(pan.offset_x(), -100.0);

    pan.begin_drag(200.0);
    assert_eq!(pan.drag_to(250.0), Some(-50.0));
}

#[test]
fn drag_without_start_does_nothing() {
    let mut pan = PanState::new(1000.0);
    assert_eq!(pan.drag_to(300.0), None);
    assert_eq!(pan.offset_x(), 0.0);
}

#[test]
fn resize_reclamps_offset() {
    let mut pan = PanState::new(1000.0);
    pan.begin_drag(0.0);
    assert_eq!(pan.drag_to(700.0), Some(700.0));
    assert_eq!(pan.resize(400.0), 400.0);
    assert_eq!(pan.max_pan(), 400.0);
    // Continuing the same drag stays in the new bounds.
    assert_eq!(pan.drag_to(710.0), Some(400.0));
}

#[test]
fn capability_gates() {
    assert!(InputCapabilities::desktop().hover_captions());
    assert!(!InputCapabilities::desktop().tilt_enabled());
    assert!(!InputCapabilities::phone().hover_captions());
    assert!(!InputCapabilities::phone().tilt_enabled());
    let laptop = InputCapabilities {
        hover: true,
        touch: false,
        orientation: true,
    };
    assert!(laptop.tilt_enabled());
}

#[test]
fn normalizer_ignores_tilt_without_hover() {
    let mut phone = InputNormalizer::new(InputCapabilities::phone(), 400.0);
    assert_eq!(phone.feed(InputSample::Tilt { beta_deg: 30.0 }, true).tilt, None);

    let caps = InputCapabilities {
        hover: true,
        touch: false,
        orientation: true,
    };
    let mut laptop = InputNormalizer::new(caps, 1200.0);
    assert_eq!(
        laptop.feed(InputSample::Tilt { beta_deg: 30.0 }, true).tilt,
        Some(TiltDirection::Forward)
    );
    assert_eq!(
        laptop.feed(InputSample::Tilt { beta_deg: -30.0 }, true).tilt,
        Some(TiltDirection::Backward)
    );
}

#[test]
fn normalizer_pans_only_when_pannable() {
    let mut n = InputNormalizer::new(InputCapabilities::phone(), 1000.0);
    n.feed(
        InputSample::TouchStart {
            pos: Vec2::new(500.0, 300.0),
            now_ms: 0.0,
        },
        false,
    );
    let out = n.feed(
        InputSample::TouchMove {
            pos: Vec2::new(450.0, 300.0),
        },
        false,
    );
    assert_eq!(out.pan, None);
    assert_eq!(out.position, Some(Vec2::new(450.0, 300.0)));
    n.feed(InputSample::TouchEnd { now_ms: 1000.0 }, false);

    n.feed(
        InputSample::TouchStart {
            pos: Vec2::new(500.0, 300.0),
            now_ms: 2000.0,
        },
        true,
    );
    let out = n.feed(
        InputSample::TouchMove {
            pos: Vec2::new(450.0, 300.0),
        },
        true,
    );
    assert_eq!(out.pan, Some(-50.0));
    assert_eq!(n.pan().offset_x(), -50.0);
}

#[test]
fn normalizer_reports_swipe_on_touch_end() {
    let mut n = InputNormalizer::new(InputCapabilities::phone(), 1000.0);
    let start = n.feed(
        InputSample::TouchStart {
            pos: Vec2::new(500.0, 300.0),
            now_ms: 1000.0,
        },
        true,
    );
    assert_eq!(start.position, Some(Vec2::new(500.0, 300.0)));
    assert!(n.touch_active());
    n.feed(
        InputSample::TouchMove {
            pos: Vec2::new(350.0, 310.0),
        },
        true,
    );
    let end = n.feed(InputSample::TouchEnd { now_ms: 1300.0 }, true);
    assert!(end.touch_ended);
    assert_eq!(end.swipe, Some(SwipeDirection::Left));
    assert_eq!(end.position, None);
    assert!(!n.touch_active());
    assert!(!n.pan().is_dragging());
    assert_eq!(n.last_position(), Some(Vec2::new(350.0, 310.0)));

    // A stray touch end is not reported.
    let stray = n.feed(InputSample::TouchEnd { now_ms: 1400.0 }, true);
    assert!(!stray.touch_ended);
}
