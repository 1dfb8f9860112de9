//! Mode arbitration.
//!
//! Resolves one tick's inputs into a single SG-Ready mode.  Rules are
//! checked in fixed priority order and the first one that fires decides:
//!
//! | # | Rule            | Condition                          | Mode        |
//! |---|-----------------|------------------------------------|-------------|
//! | 1 | ForceBlock      | force-block switch active          | Blocked     |
//! | 2 | ForceEncourage  | force-encourage switch active      | ForcedOn    |
//! | 3 | LowPrice        | price reading < low-price threshold| Recommended |
//! | 4 | LowTemperature  | temperature < low-temp threshold   | Recommended |
//! | 5 | Default         | —                                  | Normal      |
//!
//! Both switches active resolves to `Blocked`: the utility block always
//! wins.  A sensor that has not reported never fires its rule, so missing
//! inputs degrade to `Normal`.
//!
//! `evaluate` is pure and total: no state, no I/O.

use serde::Serialize;

use crate::config::Thresholds;
use crate::control::mode::Mode;
use crate::sensors::InputSnapshot;

/// The priority rule that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rule {
    ForceBlock,
    ForceEncourage,
    LowPrice,
    LowTemperature,
    Default,
}

impl Rule {
    /// Override rules come from switches rather than sensors.
    pub const fn is_override(self) -> bool {
        matches!(self, Self::ForceBlock | Self::ForceEncourage)
    }
}

/// Outcome of one arbitration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub mode: Mode,
    pub rule: Rule,
}

#[derive(Debug, Clone, Copy)]
pub struct ModeArbiter {
    thresholds: Thresholds,
}

impl ModeArbiter {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Target mode for this snapshot.
    pub fn decide(&self, snapshot: &InputSnapshot) -> Mode {
        self.evaluate(snapshot).mode
    }

    /// Target mode plus the rule that fired.
    pub fn evaluate(&self, snapshot: &InputSnapshot) -> Decision {
        let (mode, rule) = if snapshot.force_block {
            (Mode::Blocked, Rule::ForceBlock)
        } else if snapshot.force_encourage {
            (Mode::ForcedOn, Rule::ForceEncourage)
        } else if below(snapshot.price_level, self.thresholds.low_price) {
            (Mode::Recommended, Rule::LowPrice)
        } else if below(snapshot.temperature_c, self.thresholds.low_temperature_c) {
            (Mode::Recommended, Rule::LowTemperature)
        } else {
            (Mode::Normal, Rule::Default)
        };
        Decision { mode, rule }
    }
}

/// `true` only for a present reading strictly under the threshold.
fn below(reading: Option<f32>, threshold: f32) -> bool {
    reading.is_some_and(|v| v < threshold)
}
