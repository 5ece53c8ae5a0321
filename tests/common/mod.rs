// Shared host-side harness. The main crate is wasm-only, so the pure-Rust
// core modules are included directly, keeping their module tree intact.

#![allow(dead_code)]

pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod door {
        include!("../../src/core/door.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod gesture {
        include!("../../src/core/gesture.rs");
    }
    pub mod hotspot {
        include!("../../src/core/hotspot.rs");
    }
    pub mod preload {
        include!("../../src/core/preload.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
}

use self::core::hotspot::{Anchor, HotspotId, Layout, Rect};

/// Layout with fixed boxes, standing in for `getBoundingClientRect`.
#[derive(Clone, Debug)]
pub struct FakeLayout {
    pub container: Option<Rect>,
    pub dots: Vec<(HotspotId, Rect)>,
    pub menu: Option<Rect>,
    pub viewport: f32,
}

impl FakeLayout {
    /// 1000x800 room at the origin with 40px dots: portfolio centred on
    /// (500, 400), proposal on (720, 520), lamp on (250, 176).
    pub fn room() -> Self {
        Self {
            container: Some(Rect::new(0.0, 0.0, 1000.0, 800.0)),
            dots: vec![
                (HotspotId::Portfolio, Rect::new(480.0, 380.0, 40.0, 40.0)),
                (HotspotId::Proposal, Rect::new(700.0, 500.0, 40.0, 40.0)),
                (HotspotId::Lamp, Rect::new(230.0, 156.0, 40.0, 40.0)),
            ],
            menu: Some(Rect::new(900.0, 10.0, 60.0, 60.0)),
            viewport: 1000.0,
        }
    }

    /// 400x600 door container at (100, 50) on a 1200px-wide viewport.
    pub fn door() -> Self {
        Self {
            container: Some(Rect::new(100.0, 50.0, 400.0, 600.0)),
            dots: Vec::new(),
            menu: None,
            viewport: 1200.0,
        }
    }

    pub fn with_dot(mut self, id: HotspotId, rect: Rect) -> Self {
        self.dots.retain(|(d, _)| *d != id);
        self.dots.push((id, rect));
        self
    }

    pub fn without_dot(mut self, id: HotspotId) -> Self {
        self.dots.retain(|(d, _)| *d != id);
        self
    }
}

impl Layout for FakeLayout {
    fn rect(&self, anchor: Anchor) -> Option<Rect> {
        match anchor {
            Anchor::Container => self.container,
            Anchor::HintDot(id) => self.dots.iter().find(|(d, _)| *d == id).map(|(_, r)| *r),
            Anchor::MenuButton => self.menu,
        }
    }

    fn viewport_width(&self) -> f32 {
        self.viewport
    }
}
