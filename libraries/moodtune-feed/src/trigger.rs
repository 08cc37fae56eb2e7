//! Incremental load trigger.
//!
//! The trigger is a watcher that is registered only while loading more is
//! allowed and torn down on every transition out of that condition. A
//! watcher that is not registered cannot fire, so a visibility signal that
//! arrives while a fetch is in flight (or after the list is exhausted) is
//! ignored.

use tracing::trace;

/// Coarse state of incremental loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPhase {
    /// Watcher registered, waiting to become visible
    Idle,
    /// First page for the current filters is in flight
    Loading,
    /// A load-more page is in flight
    LoadingMore,
    /// Every matching result is shown
    Exhausted,
}

/// Result of reconciling the watcher with the feed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerChange {
    Registered,
    TornDown,
    Unchanged,
}

/// Visibility watcher guarded by `can_trigger_load_more`.
#[derive(Debug, Clone, Default)]
pub struct LoadMoreTrigger {
    registered: bool,
}

impl LoadMoreTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Register or tear down the watcher to match `armed`.
    pub fn sync(&mut self, armed: bool) -> TriggerChange {
        match (self.registered, armed) {
            (false, true) => {
                self.registered = true;
                trace!("Load-more trigger registered");
                TriggerChange::Registered
            }
            (true, false) => {
                self.registered = false;
                trace!("Load-more trigger torn down");
                TriggerChange::TornDown
            }
            _ => TriggerChange::Unchanged,
        }
    }

    /// The trigger scrolled into view.
    ///
    /// Returns `true` if a load-more should start. Firing consumes the
    /// registration, so repeated signals before the next `sync` do nothing.
    pub fn on_visible(&mut self) -> bool {
        if !self.registered {
            return false;
        }
        self.registered = false;
        true
    }

    /// Phase implied by the feed's flags.
    pub fn phase(loading: bool, loading_more: bool, has_more: bool) -> TriggerPhase {
        if loading {
            TriggerPhase::Loading
        } else if loading_more {
            TriggerPhase::LoadingMore
        } else if has_more {
            TriggerPhase::Idle
        } else {
            TriggerPhase::Exhausted
        }
    }
}
