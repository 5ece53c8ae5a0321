use super::constants::{
    PAN_MIN_EXTENT_PX, PAN_VIEWPORT_FRACTION, SWIPE_MAX_DURATION_MS, SWIPE_MIN_DISTANCE_PX,
    TILT_THRESHOLD_DEG,
};
use glam::Vec2;

/// What the platform can do, resolved once at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCapabilities {
    /// `(hover: hover) and (pointer: fine)` matched.
    pub hover: bool,
    pub touch: bool,
    pub orientation: bool,
}

impl InputCapabilities {
    pub const fn desktop() -> Self {
        Self {
            hover: true,
            touch: false,
            orientation: false,
        }
    }

    pub const fn phone() -> Self {
        Self {
            hover: false,
            touch: true,
            orientation: true,
        }
    }

    /// Hover alone may reveal captions.
    #[inline]
    pub fn hover_captions(&self) -> bool {
        self.hover
    }

    /// Tilt is only listened to on hover-capable platforms; on phones and
    /// tablets it misfires.
    #[inline]
    pub fn tilt_enabled(&self) -> bool {
        self.orientation && self.hover
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Classify a finished horizontal gesture.
pub fn classify_swipe(distance_px: f32, duration_ms: f64) -> Option<SwipeDirection> {
    if !(duration_ms < SWIPE_MAX_DURATION_MS) || distance_px.abs() <= SWIPE_MIN_DISTANCE_PX {
        return None;
    }
    Some(if distance_px < 0.0 {
        SwipeDirection::Left
    } else {
        SwipeDirection::Right
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltDirection {
    /// beta > threshold
    Forward,
    /// beta < -threshold
    Backward,
}

pub fn classify_tilt(beta_deg: f64) -> Option<TiltDirection> {
    if beta_deg > TILT_THRESHOLD_DEG {
        Some(TiltDirection::Forward)
    } else if beta_deg < -TILT_THRESHOLD_DEG {
        Some(TiltDirection::Backward)
    } else {
        None
    }
}

/// Records the start of a touch and classifies it when the touch ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: f32,
    start_ms: f64,
    last_x: f32,
    active: bool,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32, now_ms: f64) {
        self.start_x = x;
        self.last_x = x;
        self.start_ms = now_ms;
        self.active = true;
    }

    pub fn track(&mut self, x: f32) {
        if self.active {
            self.last_x = x;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ends the gesture. Returns None if no touch was in progress or it was not a swipe.
    pub fn finish(&mut self, now_ms: f64) -> Option<SwipeDirection> {
        if !self.active {
            return None;
        }
        self.active = false;
        classify_swipe(self.last_x - self.start_x, now_ms - self.start_ms)
    }
}

pub fn max_pan_for(viewport_width: f32) -> f32 {
    PAN_MIN_EXTENT_PX.max(PAN_VIEWPORT_FRACTION * viewport_width)
}

/// Horizontal pan of the background layer. The offset survives the end of a
/// drag and is clamped to `[-max_pan, max_pan]` on every update.
#[derive(Clone, Copy, Debug)]
pub struct PanState {
    offset_x: f32,
    max_pan: f32,
    base_offset: f32,
    drag_start_x: Option<f32>,
}

impl PanState {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            offset_x: 0.0,
            max_pan: max_pan_for(viewport_width),
            base_offset: 0.0,
            drag_start_x: None,
        }
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn max_pan(&self) -> f32 {
        self.max_pan
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start_x.is_some()
    }

    pub fn begin_drag(&mut self, x: f32) {
        self.base_offset = self.offset_x;
        self.drag_start_x = Some(x);
    }

    /// Returns the new offset if a drag is in progress.
    pub fn drag_to(&mut self, x: f32) -> Option<f32> {
        let start = self.drag_start_x?;
        self.offset_x = (self.base_offset + (x - start)).clamp(-self.max_pan, self.max_pan);
        Some(self.offset_x)
    }

    pub fn end_drag(&mut self) {
        self.drag_start_x = None;
    }

    /// Recompute bounds for a new viewport and re-clamp the current offset.
    pub fn resize(&mut self, viewport_width: f32) -> f32 {
        self.max_pan = max_pan_for(viewport_width);
        self.offset_x = self.offset_x.clamp(-self.max_pan, self.max_pan);
        self.base_offset = self.base_offset.clamp(-self.max_pan, self.max_pan);
        self.offset_x
    }
}

/// Raw input, already stripped of DOM types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputSample {
    PointerMove { pos: Vec2 },
    TouchStart { pos: Vec2, now_ms: f64 },
    TouchMove { pos: Vec2 },
    TouchEnd { now_ms: f64 },
    Tilt { beta_deg: f64 },
}

/// What the normalizer derived from one sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Normalized {
    /// Position to hit-test, if the sample carried one.
    pub position: Option<Vec2>,
    /// New pan offset when a drag moved it.
    pub pan: Option<f32>,
    pub swipe: Option<SwipeDirection>,
    pub tilt: Option<TiltDirection>,
    pub touch_ended: bool,
}

/// Turns mouse, touch and orientation events into one position stream plus
/// discrete gestures.
#[derive(Clone, Debug)]
pub struct InputNormalizer {
    caps: InputCapabilities,
    swipe: SwipeTracker,
    pan: PanState,
    last_pos: Option<Vec2>,
}

impl InputNormalizer {
    pub fn new(caps: InputCapabilities, viewport_width: f32) -> Self {
        Self {
            caps,
            swipe: SwipeTracker::default(),
            pan: PanState::new(viewport_width),
            last_pos: None,
        }
    }

    pub fn capabilities(&self) -> InputCapabilities {
        self.caps
    }

    pub fn pan(&self) -> &PanState {
        &self.pan
    }

    pub fn last_position(&self) -> Option<Vec2> {
        self.last_pos
    }

    pub fn touch_active(&self) -> bool {
        self.swipe.is_active()
    }

    pub fn resize(&mut self, viewport_width: f32) -> f32 {
        self.pan.resize(viewport_width)
    }

    /// `pannable` says whether the scene is currently in its open, interactive state.
    pub fn feed(&mut self, sample: InputSample, pannable: bool) -> Normalized {
        let mut out = Normalized::default();
        match sample {
            InputSample::PointerMove { pos } => {
                self.last_pos = Some(pos);
                out.position = Some(pos);
            }
            InputSample::TouchStart { pos, now_ms } => {
                self.swipe.begin(pos.x, now_ms);
                if pannable {
                    self.pan.begin_drag(pos.x);
                }
                self.last_pos = Some(pos);
                out.position = Some(pos);
            }
            InputSample::TouchMove { pos } => {
                self.swipe.track(pos.x);
                if pannable {
                    out.pan = self.pan.drag_to(pos.x);
                }
                self.last_pos = Some(pos);
                out.position = Some(pos);
            }
            InputSample::TouchEnd { now_ms } => {
                out.touch_ended = self.swipe.is_active();
                out.swipe = self.swipe.finish(now_ms);
                self.pan.end_drag();
            }
            InputSample::Tilt { beta_deg } => {
                if self.caps.tilt_enabled() {
                    out.tilt = classify_tilt(beta_deg);
                }
            }
        }
        out
    }
}
