use super::gesture::{SwipeDirection, TiltDirection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorState {
    Closed,
    Open,
    /// Exit has started; nothing can leave this state except page unload.
    TransitioningOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorTrigger {
    /// Tap/click on the opening hotspot (the knob).
    PrimaryHotspot,
    /// Tap/click on the closing target (knob or "no" in the entry bubble).
    SecondaryHotspot,
    Swipe(SwipeDirection),
    Tilt(TiltDirection),
    /// The menu forces the door open while it is being used.
    Menu,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorEvent {
    Opened,
    Closed,
    ExitStarted,
}

/// Which trigger sources are wired to the door on this page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerPolicy {
    pub swipe: bool,
    pub tilt: bool,
    pub exit: bool,
}

impl Default for TriggerPolicy {
    fn default() -> Self {
        Self {
            swipe: false,
            tilt: false,
            exit: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DoorController {
    state: DoorState,
    policy: TriggerPolicy,
}

impl DoorController {
    pub fn new(initial: DoorState, policy: TriggerPolicy) -> Self {
        Self {
            state: initial,
            policy,
        }
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn policy(&self) -> TriggerPolicy {
        self.policy
    }

    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    /// Apply a trigger. Returns the event only when the state actually changed,
    /// so repeating a trigger is a no-op.
    pub fn apply(&mut self, trigger: DoorTrigger) -> Option<DoorEvent> {
        use DoorState::*;
        use DoorTrigger::*;

        match trigger {
            Swipe(_) if !self.policy.swipe => return None,
            Tilt(_) if !self.policy.tilt => return None,
            Exit if !self.policy.exit => return None,
            _ => {}
        }

        let (next, event) = match (self.state, trigger) {
            (TransitioningOut, _) => return None,
            (
                Closed,
                PrimaryHotspot
                | Menu
                | Swipe(SwipeDirection::Right)
                | Tilt(TiltDirection::Backward),
            ) => (Open, DoorEvent::Opened),
            (
                Open,
                SecondaryHotspot | Swipe(SwipeDirection::Left) | Tilt(TiltDirection::Forward),
            ) => (Closed, DoorEvent::Closed),
            (Open, Exit) => (TransitioningOut, DoorEvent::ExitStarted),
            _ => return None,
        };
        log::info!("[door] {:?} -> {:?} via {:?}", self.state, next, trigger);
        self.state = next;
        Some(event)
    }
}
