use super::constants::{
    HIT_FORGIVENESS, KNOB_CENTER_DESKTOP, KNOB_CENTER_MOBILE, KNOB_RADIUS_DESKTOP,
    KNOB_RADIUS_MOBILE, LAMP_CENTER, LAMP_RADIUS_DESKTOP, LAMP_RADIUS_MOBILE,
    MOBILE_BREAKPOINT_PX, PORTFOLIO_CENTER,
};
use super::error::SceneError;
use glam::Vec2;
use smallvec::SmallVec;

/// Interactive regions known to the scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HotspotId {
    Knob,
    Portfolio,
    Proposal,
    Lamp,
}

impl HotspotId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Knob => "knob",
            Self::Portfolio => "portfolio",
            Self::Proposal => "proposal",
            Self::Lamp => "lamp",
        }
    }
}

/// Layout boxes the hit-tester may ask about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Container,
    HintDot(HotspotId),
    MenuButton,
}

/// Axis-aligned box in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A zero-sized box means the element has not been laid out (or is hidden).
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn at_fraction(&self, frac: [f32; 2]) -> Vec2 {
        Vec2::new(
            self.left + self.width * frac[0],
            self.top + self.height * frac[1],
        )
    }

    /// Edge-inclusive containment, as used for the menu button.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let d = p - self.center;
        d.x * d.x + d.y * d.y <= self.radius * self.radius
    }
}

/// Live layout queries. Rects are reported in unpanned scene coordinates;
/// the hit-tester adds the pan offset itself.
pub trait Layout {
    fn rect(&self, anchor: Anchor) -> Option<Rect>;
    fn viewport_width(&self) -> f32;
}

/// A value that differs between phone-sized and larger viewports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Responsive<T> {
    pub desktop: T,
    pub mobile: T,
}

impl<T: Copy> Responsive<T> {
    pub const fn both(value: T) -> Self {
        Self {
            desktop: value,
            mobile: value,
        }
    }

    #[inline]
    pub fn pick(&self, viewport_width: f32) -> T {
        if viewport_width <= MOBILE_BREAKPOINT_PX {
            self.mobile
        } else {
            self.desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Region {
    /// Circle at a fraction of the scene container; radius is a fraction of its width.
    Container {
        center: Responsive<[f32; 2]>,
        radius: Responsive<f32>,
    },
    /// Circle around the rendered hint dot, scaled by `HIT_FORGIVENESS`.
    /// `placement` is where the dot is positioned inside the container (None when
    /// the stylesheet places it); with a `fallback_radius` the same placement
    /// doubles as the hit region while the dot has no size.
    HintDot {
        placement: Option<Responsive<[f32; 2]>>,
        fallback_radius: Option<Responsive<f32>>,
    },
}

/// Result of measuring one hotspot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Probe {
    pub circle: Circle,
    /// Measured from the fallback heuristic because the dot was not laid out yet.
    pub provisional: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hotspot {
    pub id: HotspotId,
    /// Lower values are tested first.
    pub priority: u8,
    pub region: Region,
}

impl Hotspot {
    pub const fn knob() -> Self {
        Self {
            id: HotspotId::Knob,
            priority: 0,
            region: Region::Container {
                center: Responsive {
                    desktop: KNOB_CENTER_DESKTOP,
                    mobile: KNOB_CENTER_MOBILE,
                },
                radius: Responsive {
                    desktop: KNOB_RADIUS_DESKTOP,
                    mobile: KNOB_RADIUS_MOBILE,
                },
            },
        }
    }

    pub const fn portfolio() -> Self {
        Self {
            id: HotspotId::Portfolio,
            priority: 0,
            region: Region::HintDot {
                placement: Some(Responsive::both(PORTFOLIO_CENTER)),
                fallback_radius: None,
            },
        }
    }

    pub const fn proposal() -> Self {
        Self {
            id: HotspotId::Proposal,
            priority: 1,
            region: Region::HintDot {
                placement: None,
                fallback_radius: None,
            },
        }
    }

    pub const fn lamp() -> Self {
        Self {
            id: HotspotId::Lamp,
            priority: 2,
            region: Region::HintDot {
                placement: Some(Responsive::both(LAMP_CENTER)),
                fallback_radius: Some(Responsive {
                    desktop: LAMP_RADIUS_DESKTOP,
                    mobile: LAMP_RADIUS_MOBILE,
                }),
            },
        }
    }

    /// Container-relative fraction the hint dot should be placed at, if any.
    pub fn placement(&self, viewport_width: f32) -> Option<[f32; 2]> {
        match self.region {
            Region::Container { center, .. } => Some(center.pick(viewport_width)),
            Region::HintDot { placement, .. } => placement.map(|p| p.pick(viewport_width)),
        }
    }

    /// Radius in pixels for a container of the given width, when the region is
    /// derived from the container rather than from a rendered dot.
    pub fn container_radius(&self, container_width: f32, viewport_width: f32) -> Option<f32> {
        match self.region {
            Region::Container { radius, .. } => Some(container_width * radius.pick(viewport_width)),
            Region::HintDot {
                fallback_radius, ..
            } => fallback_radius.map(|r| container_width * r.pick(viewport_width)),
        }
    }

    /// Measure the hotspot against live layout. `Ok(None)` means the hotspot has
    /// no element and no fallback on this page, so it can never match.
    pub fn probe<L: Layout + ?Sized>(
        &self,
        layout: &L,
        pan_x: f32,
    ) -> Result<Option<Probe>, SceneError> {
        let vw = layout.viewport_width();
        let pan = Vec2::new(pan_x, 0.0);
        match self.region {
            Region::Container { center, radius } => {
                let Some(rect) = layout.rect(Anchor::Container) else {
                    return Ok(None);
                };
                if !rect.is_laid_out() {
                    return Err(SceneError::LayoutNotReady(Anchor::Container));
                }
                Ok(Some(Probe {
                    circle: Circle {
                        center: rect.at_fraction(center.pick(vw)) + pan,
                        radius: rect.width * radius.pick(vw),
                    },
                    provisional: false,
                }))
            }
            Region::HintDot {
                placement,
                fallback_radius,
            } => {
                let dot = layout.rect(Anchor::HintDot(self.id));
                if let Some(r) = dot.filter(Rect::is_laid_out) {
                    return Ok(Some(Probe {
                        circle: Circle {
                            center: r.center() + pan,
                            radius: r.width.max(r.height) * HIT_FORGIVENESS,
                        },
                        provisional: false,
                    }));
                }
                let (Some(at), Some(radius)) = (placement, fallback_radius) else {
                    return match dot {
                        Some(_) => Err(SceneError::LayoutNotReady(Anchor::HintDot(self.id))),
                        None => Ok(None),
                    };
                };
                let container = layout
                    .rect(Anchor::Container)
                    .filter(Rect::is_laid_out)
                    .ok_or(SceneError::LayoutNotReady(Anchor::Container))?;
                Ok(Some(Probe {
                    circle: Circle {
                        center: container.at_fraction(at.pick(vw)) + pan,
                        radius: container.width * radius.pick(vw),
                    },
                    provisional: dot.is_some(),
                }))
            }
        }
    }
}

/// Outcome of one hit-test pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    pub active: Option<HotspotId>,
    /// Some hotspot could not be measured reliably; test again shortly.
    pub deferred: bool,
}

/// Hotspots kept in priority order and tested generically.
#[derive(Clone, Debug, Default)]
pub struct HotspotRegistry {
    spots: SmallVec<[Hotspot; 4]>,
}

impl HotspotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(spots: impl IntoIterator<Item = Hotspot>) -> Self {
        let mut reg = Self::new();
        for s in spots {
            reg.register(s);
        }
        reg
    }

    /// Insert or replace a hotspot. Equal priorities keep registration order.
    pub fn register(&mut self, spot: Hotspot) {
        self.spots.retain(|s| s.id != spot.id);
        let at = self
            .spots
            .iter()
            .position(|s| s.priority > spot.priority)
            .unwrap_or(self.spots.len());
        self.spots.insert(at, spot);
    }

    pub fn get(&self, id: HotspotId) -> Option<&Hotspot> {
        self.spots.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hotspot> {
        self.spots.iter()
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Report the highest-priority hotspot containing `pointer`, if any.
    /// While a higher-priority hotspot cannot be measured, nothing below it
    /// is reported: it might be covering the pointer.
    pub fn resolve<L: Layout + ?Sized>(&self, pointer: Vec2, layout: &L, pan_x: f32) -> Resolution {
        let mut deferred = false;
        let mut blocked = false;
        for spot in &self.spots {
            match spot.probe(layout, pan_x) {
                Ok(Some(probe)) => {
                    deferred |= probe.provisional;
                    if probe.circle.contains(pointer) {
                        if blocked {
                            log::debug!("[hit] {} held back", spot.id.as_str());
                            break;
                        }
                        return Resolution {
                            active: Some(spot.id),
                            deferred,
                        };
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::debug!("[hit] {} skipped: {}", spot.id.as_str(), e);
                    deferred = true;
                    blocked = true;
                }
            }
        }
        Resolution {
            active: None,
            deferred,
        }
    }
}
