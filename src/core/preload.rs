use super::constants::{PRELOAD_HOLD_MS, PRELOAD_SETTLE_MS, PROGRESS_STEP_PERCENT};
use super::error::SceneError;

/// Where the exit action leads and what to warm up first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExitRoute {
    pub destination: &'static str,
    pub manifest: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Loading,
    Settling { remaining_ms: u32 },
    Holding { remaining_ms: u32 },
}

/// Real load progress plus the value the bar is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloadProgress {
    loaded: usize,
    total: usize,
    displayed: u8,
    failed: usize,
    phase: Phase,
}

impl PreloadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            loaded: 0,
            total,
            displayed: 0,
            failed: 0,
            phase: Phase::Loading,
        }
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn displayed_percent(&self) -> u8 {
        self.displayed
    }

    pub fn actual_percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((100 * self.loaded) as f64 / self.total as f64).round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.loaded >= self.total
    }

    /// Count one asset as resolved. Failures count too; nothing can stall.
    pub fn record(&mut self, result: Result<(), SceneError>) {
        if self.loaded >= self.total {
            log::warn!("[preload] extra completion ignored ({}/{})", self.loaded, self.total);
            return;
        }
        if let Err(e) = result {
            log::warn!("[preload] {}", e);
            self.failed += 1;
        }
        self.loaded += 1;
    }

    /// Advance the animation by one tick of `dt_ms`. Returns true once the
    /// hold after reaching 100% has elapsed.
    fn step(&mut self, dt_ms: u32) -> bool {
        let target = self.actual_percent();
        if self.displayed < target {
            self.displayed = self
                .displayed
                .saturating_add(PROGRESS_STEP_PERCENT)
                .min(target);
        }
        match self.phase {
            Phase::Loading => {
                if self.is_complete() && self.displayed == target {
                    self.phase = Phase::Settling {
                        remaining_ms: PRELOAD_SETTLE_MS,
                    };
                }
                false
            }
            Phase::Settling { remaining_ms } => {
                if dt_ms >= remaining_ms {
                    self.displayed = 100;
                    self.phase = Phase::Holding {
                        remaining_ms: PRELOAD_HOLD_MS,
                    };
                } else {
                    self.phase = Phase::Settling {
                        remaining_ms: remaining_ms - dt_ms,
                    };
                }
                false
            }
            Phase::Holding { remaining_ms } => {
                if dt_ms >= remaining_ms {
                    true
                } else {
                    self.phase = Phase::Holding {
                        remaining_ms: remaining_ms - dt_ms,
                    };
                    false
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Preloading(PreloadProgress),
    Navigating,
}

/// How a freshly started exit should proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStart {
    /// Load these assets, then tick until navigation.
    Preload(&'static [&'static str]),
    /// Nothing to load; go straight to the destination.
    NavigateNow(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking.
    Pending,
    /// Navigate now. Returned exactly once.
    Navigate(&'static str),
    /// Nothing left to do; stop the timer.
    Idle,
}

/// Exit-to-next-scene flow: Idle -> Preloading -> Navigating. There is no way back.
#[derive(Clone, Debug)]
pub struct TransitionController {
    route: Option<ExitRoute>,
    state: TransitionState,
}

impl TransitionController {
    pub fn new(route: Option<ExitRoute>) -> Self {
        Self {
            route,
            state: TransitionState::Idle,
        }
    }

    pub fn route(&self) -> Option<ExitRoute> {
        self.route
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn progress(&self) -> Option<&PreloadProgress> {
        match &self.state {
            TransitionState::Preloading(p) => Some(p),
            _ => None,
        }
    }

    pub fn displayed_percent(&self) -> u8 {
        match &self.state {
            TransitionState::Idle => 0,
            TransitionState::Preloading(p) => p.displayed_percent(),
            TransitionState::Navigating => 100,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == TransitionState::Idle
    }

    /// Start the exit. Returns None if this page has no exit or it already started.
    pub fn begin(&mut self) -> Option<ExitStart> {
        let route = self.route?;
        if !self.is_idle() {
            return None;
        }
        if route.manifest.is_empty() {
            log::info!("[preload] empty manifest, navigating to {}", route.destination);
            self.state = TransitionState::Navigating;
            return Some(ExitStart::NavigateNow(route.destination));
        }
        log::info!(
            "[preload] loading {} assets for {}",
            route.manifest.len(),
            route.destination
        );
        self.state = TransitionState::Preloading(PreloadProgress::new(route.manifest.len()));
        Some(ExitStart::Preload(route.manifest))
    }

    pub fn asset_resolved(&mut self, result: Result<(), SceneError>) {
        if let TransitionState::Preloading(p) = &mut self.state {
            p.record(result);
        }
    }

    pub fn tick(&mut self, dt_ms: u32) -> TickOutcome {
        let TransitionState::Preloading(p) = &mut self.state else {
            return TickOutcome::Idle;
        };
        if !p.step(dt_ms) {
            log::debug!(
                "[preload] {}/{} shown={} actual={}",
                p.loaded(),
                p.total(),
                p.displayed_percent(),
                p.actual_percent()
            );
            return TickOutcome::Pending;
        }
        let destination = self.route.map(|r| r.destination).unwrap_or_default();
        log::info!("[preload] complete, navigating to {}", destination);
        self.state = TransitionState::Navigating;
        TickOutcome::Navigate(destination)
    }
}
