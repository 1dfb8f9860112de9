//! Minimum dwell time between sensor-driven mode changes.
//!
//! Heat-pump controllers expect an SG-Ready state to be held for a while
//! (typically 10 minutes) once it is set.  A price or temperature reading
//! hovering around its threshold would otherwise flip the relays every
//! tick.  The guard counts control ticks since the last mode change and
//! holds back sensor-driven changes until the window has elapsed.
//!
//! Override decisions (force block / force encourage) are never held.
//! A window of zero ticks disables the guard.

use crate::control::arbiter::Decision;
use crate::control::mode::Mode;

#[derive(Debug, Clone, Copy)]
pub struct DwellGuard {
    min_ticks: u32,
    since_change: u32,
}

impl DwellGuard {
    /// Starts with the window already elapsed so the first decision after
    /// boot is applied immediately.
    pub fn new(min_ticks: u32) -> Self {
        Self {
            min_ticks,
            since_change: min_ticks,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.min_ticks > 0
    }

    /// Advance by one control tick.
    pub fn tick(&mut self) {
        self.since_change = self.since_change.saturating_add(1);
    }

    /// Restart the window after a mode change.
    pub fn restart(&mut self) {
        self.since_change = 0;
    }

    /// Ticks left before a sensor-driven change is admitted.
    pub fn remaining(&self) -> u32 {
        self.min_ticks.saturating_sub(self.since_change)
    }

    /// Whether `decision` may replace `current` this tick.
    pub fn admits(&self, current: Mode, decision: &Decision) -> bool {
        decision.mode == current || decision.rule.is_override() || self.remaining() == 0
    }
}
