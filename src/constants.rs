use crate::core::{HotspotId, SceneKind};

// DOM ids, class names and cursor glyphs used by the web layer.

// Scene containers
pub const DOOR_CONTAINER_ID: &str = "doorContainer";
pub const ROOM_CONTAINER_ID: &str = "roomContainer";

// Door page
pub const KNOB_CLOSED_ID: &str = "doorknob1";
pub const KNOB_OPEN_ID: &str = "doorknob2";
pub const KNOB_OPENED_ID: &str = "doorknobOpened";
pub const ENTRY_BUBBLE_ID: &str = "entryBubble";
pub const BUBBLE_BACKDROP_ID: &str = "bubbleBackdrop";
pub const BUBBLE_YES_ID: &str = "bubbleYes";
pub const BUBBLE_NO_ID: &str = "bubbleNo";

// Room page
pub const DOOR_OVERLAY_ID: &str = "doorOverlay";
pub const LAMP_LIGHT_ID: &str = "lampLight";
pub const MENU_BUTTON_ID: &str = "hamburgerBtn";
pub const MENU_ID: &str = "comicMenu";
pub const AUDIO_TOGGLE_ID: &str = "audioToggleBtn";
pub const AUDIO_TEXT_ID: &str = "audioText";
pub const AUDIO_ELEMENT_ID: &str = "backgroundAudio";
pub const EXIT_BUTTON_ID: &str = "exitRoomBtn";

// Transition overlay (both pages)
pub const TRANSITION_OVERLAY_ID: &str = "transitionOverlay";
pub const PROGRESS_BAR_ID: &str = "progressBar";
pub const PROGRESS_TEXT_ID: &str = "progressText";

// Classes
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_POINTER_CURSOR: &str = "pointer-cursor";
pub const CLASS_OPENED: &str = "opened";
pub const CLASS_OPENING: &str = "opening";
pub const CLASS_CLOSING: &str = "closing";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_KNOB_GLOW: &str = "knob-glow";

// CSS custom properties
pub const CSS_PAN_X: &str = "--pan-x";
pub const CSS_KNOB_LEFT: &str = "--knob-left";
pub const CSS_KNOB_TOP: &str = "--knob-top";
pub const CSS_KNOB_SIZE: &str = "--knob-size";

// Cursor glyphs
pub const CURSOR_POINTER: &str = "url('assets/img/cursor_pointer.png') 16 16, auto";
pub const CURSOR_NORMAL: &str = "url('assets/img/cursor_normal.png') 16 16, auto";
pub const CURSOR_HIDDEN: &str = "none";

// Audio toggle labels
pub const AUDIO_LABEL_ON: &str = "Disable Audio";
pub const AUDIO_LABEL_OFF: &str = "Enable Audio";

pub const HOVER_QUERY: &str = "(hover: hover) and (pointer: fine)";

#[inline]
pub fn container_id(kind: SceneKind) -> &'static str {
    match kind {
        SceneKind::Door => DOOR_CONTAINER_ID,
        SceneKind::Room | SceneKind::RoomVariant => ROOM_CONTAINER_ID,
    }
}

/// The small dot rendered on top of each hotspot.
#[inline]
pub fn hint_dot_id(id: HotspotId) -> &'static str {
    match id {
        HotspotId::Knob => "openDoorHint",
        HotspotId::Portfolio => "portfolioHint",
        HotspotId::Proposal => "proposalHint",
        HotspotId::Lamp => "lampHint",
    }
}

/// Caption elements that get the `visible` class while the hotspot is active.
#[inline]
pub fn caption_ids(id: HotspotId) -> &'static [&'static str] {
    match id {
        HotspotId::Knob => &["openDoorCenter", "doorknobHint"],
        HotspotId::Portfolio => &["portfolioCenter"],
        HotspotId::Proposal => &["proposalCenter"],
        HotspotId::Lamp => &["lampCenter"],
    }
}
