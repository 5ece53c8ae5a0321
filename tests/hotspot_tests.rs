// Host-side tests for hotspot hit-testing.
// The main crate is wasm-only, so the pure core modules are included via `common`.

#![allow(dead_code)]
mod common;

use common::core::error::SceneError;
use common::core::hotspot::*;
use common::FakeLayout;
use glam::Vec2;

fn room_registry() -> HotspotRegistry {
    HotspotRegistry::with([Hotspot::portfolio(), Hotspot::proposal(), Hotspot::lamp()])
}

#[test]
fn circle_contains_is_edge_inclusive() {
    let c = Circle {
        center: Vec2::new(10.0, 10.0),
        radius: 5.0,
    };
    assert!(c.contains(Vec2::new(10.0, 10.0)));
    assert!(c.contains(Vec2::new(15.0, 10.0)));
    assert!(!c.contains(Vec2::new(15.1, 10.0)));
    assert!(!c.contains(Vec2::new(14.0, 14.0)));
}

#[test]
fn rect_helpers() {
    let r = Rect::new(100.0, 50.0, 400.0, 600.0);
    assert!(r.is_laid_out());
    assert_eq!(r.center(), Vec2::new(300.0, 350.0));
    assert_eq!(r.at_fraction([0.5, 0.5]), r.center());
    assert!(r.contains(Vec2::new(100.0, 50.0)));
    assert!(r.contains(Vec2::new(500.0, 650.0)));
    assert!(!r.contains(Vec2::new(99.0, 60.0)));
    assert!(!Rect::new(10.0, 10.0, 0.0, 20.0).is_laid_out());
    assert!(!Rect::default().is_laid_out());
}

#[test]
fn pointer_outside_every_region_resolves_to_none() {
    let reg = room_registry();
    let layout = FakeLayout::room();
    for p in [
        Vec2::new(100.0, 700.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(999.0, 799.0),
        Vec2::new(500.0, 430.0),
        Vec2::new(250.0, 210.0),
    ] {
        let res = reg.resolve(p, &layout, 0.0);
        assert_eq!(res.active, None, "unexpected hit at {:?}", p);
        assert!(!res.deferred);
    }
}

#[test]
fn hit_radius_uses_forgiveness_factor() {
    let reg = room_registry();
    let layout = FakeLayout::room();
    // 40px dot -> radius 22px around (500, 400)
    assert_eq!(
        reg.resolve(Vec2::new(521.0, 400.0), &layout, 0.0).active,
        Some(HotspotId::Portfolio)
    );
    assert_eq!(reg.resolve(Vec2::new(523.0, 400.0), &layout, 0.0).active, None);
}

#[test]
fn each_room_hotspot_resolves_on_its_own() {
    let reg = room_registry();
    let layout = FakeLayout::room();
    let cases = [
        (Vec2::new(500.0, 400.0), HotspotId::Portfolio),
        (Vec2::new(720.0, 520.0), HotspotId::Proposal),
        (Vec2::new(250.0, 176.0), HotspotId::Lamp),
    ];
    for (p, id) in cases {
        assert_eq!(reg.resolve(p, &layout, 0.0).active, Some(id));
    }
}

#[test]
fn overlap_prefers_priority_regardless_of_registration_order() {
    // Lamp and proposal dots moved on top of the portfolio dot.
    let layout = FakeLayout::room()
        .with_dot(HotspotId::Lamp, Rect::new(490.0, 390.0, 40.0, 40.0))
        .with_dot(HotspotId::Proposal, Rect::new(485.0, 385.0, 40.0, 40.0));
    let p = Vec2::new(505.0, 405.0);

    let forward = room_registry();
    let reversed =
        HotspotRegistry::with([Hotspot::lamp(), Hotspot::proposal(), Hotspot::portfolio()]);
    assert_eq!(forward.resolve(p, &layout, 0.0).active, Some(HotspotId::Portfolio));
    assert_eq!(reversed.resolve(p, &layout, 0.0).active, Some(HotspotId::Portfolio));

    // Without the portfolio, proposal beats lamp.
    let no_portfolio = HotspotRegistry::with([Hotspot::lamp(), Hotspot::proposal()]);
    assert_eq!(
        no_portfolio.resolve(p, &layout, 0.0).active,
        Some(HotspotId::Proposal)
    );
}

#[test]
fn registry_keeps_priority_order_and_replaces_by_id() {
    let mut reg =
        HotspotRegistry::with([Hotspot::lamp(), Hotspot::proposal(), Hotspot::portfolio()]);
    let ids: Vec<_> = reg.iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        vec![HotspotId::Portfolio, HotspotId::Proposal, HotspotId::Lamp]
    );

    let mut urgent_lamp = Hotspot::lamp();
    urgent_lamp.priority = 0;
    reg.register(urgent_lamp);
    assert_eq!(reg.len(), 3);
    let ids: Vec<_> = reg.iter().map(|s| s.id).collect();
    // Equal priority keeps registration order: portfolio was first.
    assert_eq!(
        ids,
        vec![HotspotId::Portfolio, HotspotId::Lamp, HotspotId::Proposal]
    );
    assert_eq!(reg.get(HotspotId::Lamp).map(|s| s.priority), Some(0));
    assert!(reg.get(HotspotId::Knob).is_none());
    assert!(HotspotRegistry::new().is_empty());
}

#[test]
fn pan_offset_shifts_every_center() {
    let reg = room_registry();
    let layout = FakeLayout::room();
    assert_eq!(
        reg.resolve(Vec2::new(600.0, 400.0), &layout, 100.0).active,
        Some(HotspotId::Portfolio)
    );
    assert_eq!(reg.resolve(Vec2::new(500.0, 400.0), &layout, 100.0).active, None);
    assert_eq!(
        reg.resolve(Vec2::new(150.0, 176.0), &layout, -100.0).active,
        Some(HotspotId::Lamp)
    );
}

#[test]
fn zero_sized_dot_without_fallback_defers() {
    let reg = room_registry();
    let layout = FakeLayout::room().with_dot(HotspotId::Portfolio, Rect::default());
    let res = reg.resolve(Vec2::new(500.0, 400.0), &layout, 0.0);
    assert_eq!(res.active, None);
    assert!(res.deferred);

    let err = Hotspot::portfolio().probe(&layout, 0.0);
    assert_eq!(
        err,
        Err(SceneError::LayoutNotReady(Anchor::HintDot(HotspotId::Portfolio)))
    );
}

#[test]
fn unmeasured_higher_priority_hides_lower_overlap() {
    let reg = room_registry();
    let layout = FakeLayout::room()
        .with_dot(HotspotId::Portfolio, Rect::default())
        .with_dot(HotspotId::Lamp, Rect::new(490.0, 390.0, 40.0, 40.0));
    let res = reg.resolve(Vec2::new(505.0, 405.0), &layout, 0.0);
    assert_eq!(res.active, None);
    assert!(res.deferred);

    // Once the portfolio is laid out it wins the overlap.
    let layout = layout.with_dot(HotspotId::Portfolio, Rect::new(480.0, 380.0, 40.0, 40.0));
    let res = reg.resolve(Vec2::new(505.0, 405.0), &layout, 0.0);
    assert_eq!(res.active, Some(HotspotId::Portfolio));
    assert!(!res.deferred);
}

#[test]
fn absent_dot_without_fallback_never_matches() {
    let reg = room_registry();
    let layout = FakeLayout::room().without_dot(HotspotId::Proposal);
    let res = reg.resolve(Vec2::new(720.0, 520.0), &layout, 0.0);
    assert_eq!(res.active, None);
    assert!(!res.deferred);
}

#[test]
fn lamp_falls_back_to_container_fraction_while_unlaid() {
    let reg = room_registry();
    // Fallback: centre (250, 176), radius 0.04 * 1000 = 40
    let layout = FakeLayout::room().with_dot(HotspotId::Lamp, Rect::default());
    let res = reg.resolve(Vec2::new(280.0, 176.0), &layout, 0.0);
    assert_eq!(res.active, Some(HotspotId::Lamp));
    assert!(res.deferred, "provisional region should ask for a retry");

    // No dot element at all: fallback is final.
    let layout = FakeLayout::room().without_dot(HotspotId::Lamp);
    let res = reg.resolve(Vec2::new(280.0, 176.0), &layout, 0.0);
    assert_eq!(res.active, Some(HotspotId::Lamp));
    assert!(!res.deferred);
}

#[test]
fn lamp_fallback_needs_a_laid_out_container() {
    let mut layout = FakeLayout::room().with_dot(HotspotId::Lamp, Rect::default());
    layout.container = Some(Rect::default());
    assert_eq!(
        Hotspot::lamp().probe(&layout, 0.0),
        Err(SceneError::LayoutNotReady(Anchor::Container))
    );
    let res = room_registry().resolve(Vec2::new(250.0, 176.0), &layout, 0.0);
    assert_eq!(res.active, None);
    assert!(res.deferred);
}

#[test]
fn knob_region_on_desktop() {
    let reg = HotspotRegistry::with([Hotspot::knob()]);
    let layout = FakeLayout::door();
    // Centre (332, 374), radius 0.06 * 400 = 24
    assert_eq!(
        reg.resolve(Vec2::new(352.0, 374.0), &layout, 0.0).active,
        Some(HotspotId::Knob)
    );
    assert_eq!(reg.resolve(Vec2::new(360.0, 374.0), &layout, 0.0).active, None);
}

#[test]
fn knob_region_grows_on_mobile() {
    let reg = HotspotRegistry::with([Hotspot::knob()]);
    let mut layout = FakeLayout::door();
    let p = Vec2::new(370.0, 386.0);
    assert_eq!(reg.resolve(p, &layout, 0.0).active, None);

    // Centre (340, 386), radius 0.08 * 400 = 32
    layout.viewport = 500.0;
    assert_eq!(reg.resolve(p, &layout, 0.0).active, Some(HotspotId::Knob));
}

#[test]
fn knob_container_not_laid_out_defers() {
    let mut layout = FakeLayout::door();
    layout.container = Some(Rect::new(100.0, 50.0, 0.0, 0.0));
    let res = HotspotRegistry::with([Hotspot::knob()]).resolve(Vec2::new(332.0, 374.0), &layout, 0.0);
    assert_eq!(res.active, None);
    assert!(res.deferred);
}

#[test]
fn placement_and_radius_follow_breakpoint() {
    let knob = Hotspot::knob();
    assert_eq!(knob.placement(1024.0), Some([0.58, 0.54]));
    assert_eq!(knob.placement(768.0), Some([0.60, 0.56]));
    assert_eq!(Hotspot::proposal().placement(1024.0), None);
    assert_eq!(Hotspot::portfolio().placement(400.0), Some([0.5, 0.5]));

    let r = knob.container_radius(500.0, 1024.0).unwrap();
    assert!((r - 30.0).abs() < 1e-3);
    let r = Hotspot::lamp().container_radius(500.0, 600.0).unwrap();
    assert!((r - 25.0).abs() < 1e-3);
    assert_eq!(Hotspot::portfolio().container_radius(500.0, 1024.0), None);
}
