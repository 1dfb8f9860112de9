//! Boolean override switches ("force block", "force encourage").
//!
//! The host invokes [`SwitchInput::set`] whenever the switch entity is
//! toggled (UI action, utility contact edge, ISR).  The latest value is
//! authoritative.  Edge detection runs on the control-loop side in
//! [`SwitchWatcher`], one watcher per switch.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Shared, lock-free switch state.
pub struct SwitchInput {
    name: &'static str,
    active: AtomicBool,
    toggles: AtomicU32,
}

impl SwitchInput {
    /// A switch in the inactive position.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            active: AtomicBool::new(false),
            toggles: AtomicU32::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Host update callback.  Counts a toggle only on a real change.
    pub fn set(&self, active: bool) {
        let prev = self.active.swap(active, Ordering::AcqRel);
        if prev != active {
            self.toggles.fetch_add(1, Ordering::Release);
        }
    }

    /// Active while any of `sources` is active.  For a switch fed by
    /// more than one writer (hardware contact plus host entity): the
    /// owner merges them here instead of each writer calling `set`.
    pub fn set_any(&self, sources: impl IntoIterator<Item = bool>) {
        self.set(sources.into_iter().any(|s| s));
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Number of state changes since boot (wraps).
    pub fn toggle_count(&self) -> u32 {
        self.toggles.load(Ordering::Acquire)
    }
}

impl core::fmt::Debug for SwitchInput {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwitchInput")
            .field("name", &self.name)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Direction of a switch change between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Switched on.
    Rising,
    /// Switched off.
    Falling,
}

/// Tick-side edge detector.  Starts in the inactive position, matching a
/// freshly constructed [`SwitchInput`].
#[derive(Debug, Default)]
pub struct SwitchWatcher {
    last: bool,
}

impl SwitchWatcher {
    pub const fn new() -> Self {
        Self { last: false }
    }

    /// Feed the level sampled this tick.  Returns the edge, if any, since
    /// the previous sample.
    pub fn poll(&mut self, active: bool) -> Option<Edge> {
        let edge = match (self.last, active) {
            (false, true) => Some(Edge::Rising),
            (true, false) => Some(Edge::Falling),
            _ => None,
        };
        self.last = active;
        edge
    }

    pub fn last(&self) -> bool {
        self.last
    }
}
