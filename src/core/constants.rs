// Scene tuning constants shared by the core and the web layer.

// Swipe classification
pub const SWIPE_MIN_DISTANCE_PX: f32 = 120.0; // |endX - startX| must exceed this
pub const SWIPE_MAX_DURATION_MS: f64 = 500.0; // and the gesture must be quicker than this

// Tilt: beta beyond this (degrees) counts as a deliberate tilt
pub const TILT_THRESHOLD_DEG: f64 = 0.0;

// Hit-testing
pub const HIT_FORGIVENESS: f32 = 0.55; // radius = max(w, h) * factor of the hint dot
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const LAYOUT_RETRY_MS: i32 = 100;
pub const LAYOUT_RETRY_LIMIT: u8 = 10;

// Horizontal pan
pub const PAN_MIN_EXTENT_PX: f32 = 400.0;
pub const PAN_VIEWPORT_FRACTION: f32 = 0.75;

// Preload progress animation
pub const PROGRESS_STEP_PERCENT: u8 = 2;
pub const PROGRESS_TICK_MS: u32 = 100;
pub const PRELOAD_SETTLE_MS: u32 = 300;
pub const PRELOAD_HOLD_MS: u32 = 400;

// Feedback
pub const CLICK_FLASH_MS: i32 = 120;

// Knob region (fractions of the door container)
pub const KNOB_CENTER_DESKTOP: [f32; 2] = [0.58, 0.54];
pub const KNOB_CENTER_MOBILE: [f32; 2] = [0.60, 0.56];
pub const KNOB_RADIUS_DESKTOP: f32 = 0.06;
pub const KNOB_RADIUS_MOBILE: f32 = 0.08;

// Lamp fallback region (fractions of the room container)
pub const LAMP_CENTER: [f32; 2] = [0.25, 0.22];
pub const LAMP_RADIUS_DESKTOP: f32 = 0.04;
pub const LAMP_RADIUS_MOBILE: f32 = 0.05;

// Portfolio dot sits on the monitor, which is the container centre
pub const PORTFOLIO_CENTER: [f32; 2] = [0.5, 0.5];

// Destinations
pub const ROOM_PAGE: &str = "room.html";
pub const INDEX_PAGE: &str = "index.html";
pub const PORTFOLIO_PAGE: &str = "portfolio.html";
pub const PROPOSAL_PAGE: &str = "proposal.html";

// Asset manifests, relative to ASSET_BASE
pub const ASSET_BASE: &str = "assets/img/";
pub const ROOM_MANIFEST: &[&str] = &[
    "room_bg.png",
    "lamp_light.png",
    "cat.png",
    "pc.png",
    "coffee.png",
    "cursor_normal.png",
    "cursor_pointer.png",
];
pub const INDEX_MANIFEST: &[&str] = &[
    "closed_door.png",
    "opened_door.png",
    "cursor_normal.png",
    "cursor_pointer.png",
];

// User-facing notice when the browser refuses to start playback
pub const PLAYBACK_BLOCKED_NOTICE: &str =
    "Please click Enable Audio to allow background music playback.";
