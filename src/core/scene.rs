use super::constants::{
    INDEX_MANIFEST, INDEX_PAGE, LAYOUT_RETRY_LIMIT, PLAYBACK_BLOCKED_NOTICE, PORTFOLIO_PAGE,
    PROPOSAL_PAGE, ROOM_MANIFEST, ROOM_PAGE,
};
use super::door::{DoorController, DoorEvent, DoorState, DoorTrigger, TriggerPolicy};
use super::error::SceneError;
use super::gesture::{InputCapabilities, InputNormalizer, InputSample};
use super::hotspot::{Anchor, Hotspot, HotspotId, HotspotRegistry, Layout};
use super::preload::{ExitRoute, ExitStart, TickOutcome, TransitionController, TransitionState};
use glam::Vec2;
use smallvec::SmallVec;

/// The page variants sharing this code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Door,
    Room,
    RoomVariant,
}

impl SceneKind {
    /// Parse the `data-scene` attribute of the page body.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "door" | "index" | "entry" => Some(Self::Door),
            "room" => Some(Self::Room),
            "room-variant" | "room2" => Some(Self::RoomVariant),
            _ => None,
        }
    }
}

/// Parse an on/off page attribute such as `data-swipe`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

static DOOR_HOTSPOTS: [Hotspot; 1] = [Hotspot::knob()];
static ROOM_HOTSPOTS: [Hotspot; 3] = [Hotspot::portfolio(), Hotspot::proposal(), Hotspot::lamp()];

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub kind: SceneKind,
    pub initial_door: DoorState,
    /// Hotspots are only hit-tested while the door is in this state.
    pub interactive_in: DoorState,
    pub triggers: TriggerPolicy,
    pub hotspots: &'static [Hotspot],
    pub exit: Option<ExitRoute>,
    pub pan: bool,
    pub menu: bool,
}

impl SceneConfig {
    pub fn for_kind(kind: SceneKind) -> Self {
        match kind {
            SceneKind::Door => Self {
                kind,
                initial_door: DoorState::Closed,
                interactive_in: DoorState::Closed,
                triggers: TriggerPolicy {
                    swipe: false,
                    tilt: false,
                    exit: true,
                },
                hotspots: &DOOR_HOTSPOTS,
                exit: Some(ExitRoute {
                    destination: ROOM_PAGE,
                    manifest: ROOM_MANIFEST,
                }),
                pan: false,
                menu: false,
            },
            SceneKind::Room | SceneKind::RoomVariant => Self {
                kind,
                initial_door: DoorState::Open,
                interactive_in: DoorState::Open,
                // Swipe stays off: accidental swipes blacked out the scene on phones.
                triggers: TriggerPolicy {
                    swipe: false,
                    tilt: kind == SceneKind::Room,
                    exit: true,
                },
                hotspots: &ROOM_HOTSPOTS,
                exit: Some(ExitRoute {
                    destination: INDEX_PAGE,
                    manifest: INDEX_MANIFEST,
                }),
                pan: true,
                menu: true,
            },
        }
    }

    pub fn with_swipe(mut self, enabled: bool) -> Self {
        self.triggers.swipe = enabled;
        self
    }

    pub fn with_tilt(mut self, enabled: bool) -> Self {
        self.triggers.tilt = enabled;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    Play,
    Stop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AudioState {
    Off,
    Starting,
    On,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Everything the page has to do in response to an input. The web layer
/// applies these in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEffect {
    Cursor(Cursor),
    Caption { id: HotspotId, visible: bool },
    FlashCursor,
    Door(DoorEvent),
    Lamp(bool),
    Menu(bool),
    Audio(AudioCommand),
    AudioLabel(bool),
    Notice(&'static str),
    Pan(f32),
    TransitionStarted,
    Preload(&'static [&'static str]),
    Progress(u8),
    Navigate(&'static str),
    /// Hit-testing could not measure a hotspot; run it again shortly.
    RetryLayout,
}

pub type Effects = SmallVec<[SceneEffect; 4]>;

/// Cursor and caption state currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub cursor: Cursor,
    pub caption: Option<HotspotId>,
    pub active: Option<HotspotId>,
}

/// Single owner of all per-page state. Every handler goes through it.
#[derive(Clone, Debug)]
pub struct SceneState {
    config: SceneConfig,
    registry: HotspotRegistry,
    door: DoorController,
    transition: TransitionController,
    input: InputNormalizer,
    feedback: Feedback,
    menu_open: bool,
    lamp_on: bool,
    audio: AudioState,
    layout_retries: u8,
}

impl SceneState {
    pub fn new(config: SceneConfig, caps: InputCapabilities, viewport_width: f32) -> Self {
        let mut triggers = config.triggers;
        triggers.exit &= config.exit.is_some();
        Self {
            registry: HotspotRegistry::with(config.hotspots.iter().copied()),
            door: DoorController::new(config.initial_door, triggers),
            transition: TransitionController::new(config.exit),
            input: InputNormalizer::new(caps, viewport_width),
            feedback: Feedback::default(),
            menu_open: false,
            lamp_on: false,
            audio: AudioState::Off,
            layout_retries: 0,
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn capabilities(&self) -> InputCapabilities {
        self.input.capabilities()
    }

    pub fn registry(&self) -> &HotspotRegistry {
        &self.registry
    }

    pub fn door_state(&self) -> DoorState {
        self.door.state()
    }

    pub fn transition_state(&self) -> TransitionState {
        self.transition.state()
    }

    pub fn displayed_percent(&self) -> u8 {
        self.transition.displayed_percent()
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn active_hotspot(&self) -> Option<HotspotId> {
        self.feedback.active
    }

    pub fn pan_offset(&self) -> f32 {
        self.input.pan().offset_x()
    }

    pub fn max_pan(&self) -> f32 {
        self.input.pan().max_pan()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn lamp_on(&self) -> bool {
        self.lamp_on
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio == AudioState::On
    }

    pub fn last_pointer(&self) -> Option<Vec2> {
        self.input.last_position()
    }

    fn pannable(&self) -> bool {
        self.config.pan && self.door.is_open() && self.transition.is_idle()
    }

    // ---------------- Pointer input ----------------

    pub fn pointer_moved<L: Layout + ?Sized>(&mut self, pos: Vec2, layout: &L) -> Effects {
        let pannable = self.pannable();
        self.input.feed(InputSample::PointerMove { pos }, pannable);
        self.refresh_at(pos, layout, PointerSource::Mouse)
    }

    pub fn touch_started<L: Layout + ?Sized>(
        &mut self,
        pos: Vec2,
        now_ms: f64,
        layout: &L,
    ) -> Effects {
        let pannable = self.pannable();
        self.input
            .feed(InputSample::TouchStart { pos, now_ms }, pannable);
        self.refresh_at(pos, layout, PointerSource::Touch)
    }

    pub fn touch_moved<L: Layout + ?Sized>(&mut self, pos: Vec2, layout: &L) -> Effects {
        let pannable = self.pannable();
        let n = self.input.feed(InputSample::TouchMove { pos }, pannable);
        let mut fx = Effects::new();
        if let Some(offset) = n.pan {
            fx.push(SceneEffect::Pan(offset));
        }
        fx.extend(self.refresh_at(pos, layout, PointerSource::Touch));
        fx
    }

    pub fn touch_ended(&mut self, now_ms: f64) -> Effects {
        let n = self.input.feed(InputSample::TouchEnd { now_ms }, false);
        let mut fx = Effects::new();
        if !n.touch_ended {
            return fx;
        }
        if !self.menu_open {
            if let Some(dir) = n.swipe {
                fx.extend(self.trigger(DoorTrigger::Swipe(dir)));
            }
        }
        // Touch captions only live while the finger is on the region.
        let next = Feedback {
            caption: None,
            ..self.feedback
        };
        self.apply_feedback(next, &mut fx);
        fx
    }

    pub fn tilted(&mut self, beta_deg: f64) -> Effects {
        let n = self.input.feed(InputSample::Tilt { beta_deg }, false);
        match n.tilt {
            Some(dir) => self.trigger(DoorTrigger::Tilt(dir)),
            None => Effects::new(),
        }
    }

    pub fn resized(&mut self, viewport_width: f32) -> Effects {
        let before = self.input.pan().offset_x();
        let after = self.input.resize(viewport_width);
        let mut fx = Effects::new();
        if after != before {
            fx.push(SceneEffect::Pan(after));
        }
        fx
    }

    /// Re-run hit-testing at the last known pointer position (after a door
    /// change or a deferred layout). A finger still on the screen keeps its
    /// touch caption.
    pub fn refresh<L: Layout + ?Sized>(&mut self, layout: &L) -> Effects {
        let source = if self.input.touch_active() {
            PointerSource::Touch
        } else {
            PointerSource::Mouse
        };
        match self.input.last_position() {
            Some(pos) => self.refresh_at(pos, layout, source),
            None => Effects::new(),
        }
    }

    fn refresh_at<L: Layout + ?Sized>(
        &mut self,
        pos: Vec2,
        layout: &L,
        source: PointerSource,
    ) -> Effects {
        let mut fx = Effects::new();
        let next = self.target_feedback(pos, layout, source, &mut fx);
        self.apply_feedback(next, &mut fx);
        fx
    }

    fn target_feedback<L: Layout + ?Sized>(
        &mut self,
        pos: Vec2,
        layout: &L,
        source: PointerSource,
        fx: &mut Effects,
    ) -> Feedback {
        if !self.transition.is_idle() || self.door.state() == DoorState::TransitioningOut {
            return Feedback {
                cursor: Cursor::Hidden,
                caption: None,
                active: None,
            };
        }
        if layout
            .rect(Anchor::MenuButton)
            .is_some_and(|r| r.contains(pos))
        {
            return Feedback {
                cursor: Cursor::Pointer,
                caption: None,
                active: None,
            };
        }
        if self.door.state() != self.config.interactive_in {
            return Feedback::default();
        }

        let res = self.registry.resolve(pos, layout, self.pan_offset());
        if res.deferred {
            if self.layout_retries < LAYOUT_RETRY_LIMIT {
                self.layout_retries += 1;
                fx.push(SceneEffect::RetryLayout);
            } else if self.layout_retries == LAYOUT_RETRY_LIMIT {
                self.layout_retries += 1;
                log::warn!("[hit] layout still not ready, giving up until next input");
            }
        } else {
            self.layout_retries = 0;
        }

        let caption = match source {
            PointerSource::Mouse if self.capabilities().hover_captions() => res.active,
            PointerSource::Mouse => None,
            PointerSource::Touch => res.active,
        };
        Feedback {
            cursor: if res.active.is_some() {
                Cursor::Pointer
            } else {
                Cursor::Default
            },
            caption,
            active: res.active,
        }
    }

    /// Emit only what changed since the last frame.
    fn apply_feedback(&mut self, next: Feedback, fx: &mut Effects) {
        let prev = self.feedback;
        if next.cursor != prev.cursor {
            fx.push(SceneEffect::Cursor(next.cursor));
        }
        if next.caption != prev.caption {
            if let Some(id) = prev.caption {
                fx.push(SceneEffect::Caption { id, visible: false });
            }
            if let Some(id) = next.caption {
                fx.push(SceneEffect::Caption { id, visible: true });
            }
        }
        if next.active != prev.active {
            log::debug!("[hit] active {:?} -> {:?}", prev.active, next.active);
        }
        self.feedback = next;
    }

    // ---------------- Activation ----------------

    /// Click or tap inside the scene.
    pub fn activate<L: Layout + ?Sized>(&mut self, pos: Vec2, layout: &L) -> Effects {
        if !self.transition.is_idle() || self.door.state() != self.config.interactive_in {
            return Effects::new();
        }
        let res = self.registry.resolve(pos, layout, self.pan_offset());
        let mut fx = Effects::new();
        match res.active {
            Some(HotspotId::Knob) => {
                let trigger = if self.door.is_open() {
                    DoorTrigger::SecondaryHotspot
                } else {
                    DoorTrigger::PrimaryHotspot
                };
                fx.extend(self.trigger(trigger));
            }
            Some(HotspotId::Lamp) => {
                self.lamp_on = !self.lamp_on;
                log::info!("[lamp] on={}", self.lamp_on);
                fx.push(SceneEffect::Lamp(self.lamp_on));
                fx.push(SceneEffect::FlashCursor);
            }
            Some(HotspotId::Portfolio) => fx.push(SceneEffect::Navigate(PORTFOLIO_PAGE)),
            Some(HotspotId::Proposal) => fx.push(SceneEffect::Navigate(PROPOSAL_PAGE)),
            None => {}
        }
        fx
    }

    /// Feed a door trigger. Repeating a trigger that does not change state
    /// produces no effects.
    pub fn trigger(&mut self, trigger: DoorTrigger) -> Effects {
        let mut fx = Effects::new();
        match self.door.apply(trigger) {
            None => {}
            Some(DoorEvent::ExitStarted) => self.start_exit(&mut fx),
            Some(event) => {
                fx.push(SceneEffect::Door(event));
                self.apply_feedback(Feedback::default(), &mut fx);
                if matches!(
                    trigger,
                    DoorTrigger::PrimaryHotspot | DoorTrigger::SecondaryHotspot
                ) {
                    fx.push(SceneEffect::FlashCursor);
                }
            }
        }
        fx
    }

    pub fn exit(&mut self) -> Effects {
        self.trigger(DoorTrigger::Exit)
    }

    fn start_exit(&mut self, fx: &mut Effects) {
        let Some(start) = self.transition.begin() else {
            return;
        };
        fx.push(SceneEffect::TransitionStarted);
        self.apply_feedback(
            Feedback {
                cursor: Cursor::Hidden,
                caption: None,
                active: None,
            },
            fx,
        );
        match start {
            ExitStart::Preload(manifest) => {
                fx.push(SceneEffect::Progress(0));
                fx.push(SceneEffect::Preload(manifest));
            }
            ExitStart::NavigateNow(destination) => {
                fx.push(SceneEffect::Progress(100));
                fx.push(SceneEffect::Navigate(destination));
            }
        }
    }

    // ---------------- Preload ----------------

    pub fn asset_resolved(&mut self, result: Result<(), SceneError>) {
        self.transition.asset_resolved(result);
    }

    /// One tick of the progress animation. The bool says whether to keep ticking.
    pub fn progress_tick(&mut self, dt_ms: u32) -> (Effects, bool) {
        let before = self.transition.displayed_percent();
        let outcome = self.transition.tick(dt_ms);
        let after = self.transition.displayed_percent();
        let mut fx = Effects::new();
        if after != before {
            fx.push(SceneEffect::Progress(after));
        }
        let keep = match outcome {
            TickOutcome::Pending => true,
            TickOutcome::Navigate(destination) => {
                fx.push(SceneEffect::Navigate(destination));
                false
            }
            TickOutcome::Idle => false,
        };
        (fx, keep)
    }

    // ---------------- Menu and audio ----------------

    pub fn toggle_menu(&mut self) -> Effects {
        let mut fx = Effects::new();
        if !self.config.menu || !self.transition.is_idle() {
            return fx;
        }
        self.menu_open = !self.menu_open;
        fx.push(SceneEffect::Menu(self.menu_open));
        // The door is forced open while the menu is in use.
        fx.extend(self.trigger(DoorTrigger::Menu));
        fx
    }

    pub fn close_menu(&mut self) -> Effects {
        if self.menu_open {
            self.toggle_menu()
        } else {
            Effects::new()
        }
    }

    pub fn toggle_audio(&mut self) -> Effects {
        let mut fx = Effects::new();
        match self.audio {
            AudioState::Off => {
                self.audio = AudioState::Starting;
                fx.push(SceneEffect::Audio(AudioCommand::Play));
            }
            AudioState::Starting => {}
            AudioState::On => {
                self.audio = AudioState::Off;
                fx.push(SceneEffect::Audio(AudioCommand::Stop));
                fx.push(SceneEffect::AudioLabel(false));
                fx.push(SceneEffect::FlashCursor);
            }
        }
        fx
    }

    pub fn audio_started(&mut self) -> Effects {
        let mut fx = Effects::new();
        if self.audio == AudioState::Starting {
            self.audio = AudioState::On;
            fx.push(SceneEffect::AudioLabel(true));
            fx.push(SceneEffect::FlashCursor);
        }
        fx
    }

    pub fn audio_blocked(&mut self, err: SceneError) -> Effects {
        let mut fx = Effects::new();
        if self.audio == AudioState::Starting {
            log::warn!("[audio] {}", err);
            self.audio = AudioState::Off;
            fx.push(SceneEffect::Notice(PLAYBACK_BLOCKED_NOTICE));
        }
        fx
    }
}
