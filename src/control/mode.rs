//! SG-Ready operating modes and the two-line output pattern.
//!
//! ```text
//!   A B
//!   1 0  Mode 1 – Blocked      heat pump operation blocked by the utility
//!   0 0  Mode 2 – Normal       energy-efficient normal operation
//!   0 1  Mode 3 – Recommended  running is encouraged (cheap / surplus power)
//!   1 1  Mode 4 – Forced on    heat pump is ordered to run
//! ```
//!
//! The two contacts are independent lines, not a binary counter.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the four SG-Ready operating states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Blocked,
    Normal,
    Recommended,
    ForcedOn,
}

impl Mode {
    /// Every mode, in SG-Ready numbering order (1..=4).
    pub const ALL: [Mode; 4] = [Mode::Blocked, Mode::Normal, Mode::Recommended, Mode::ForcedOn];

    /// Label published on the mode text sensor.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blocked => "BLOCKED",
            Self::Normal => "NORMAL",
            Self::Recommended => "RECOMMENDED",
            Self::ForcedOn => "FORCED_ON",
        }
    }

    /// SG-Ready mode number (1 = blocked … 4 = forced on).
    pub const fn number(self) -> u8 {
        match self {
            Self::Blocked => 1,
            Self::Normal => 2,
            Self::Recommended => 3,
            Self::ForcedOn => 4,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one of the two SG-Ready output contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    A,
    B,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// Physical levels of the two output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputPattern {
    pub line_a: bool,
    pub line_b: bool,
}

impl OutputPattern {
    pub const fn new(line_a: bool, line_b: bool) -> Self {
        Self { line_a, line_b }
    }

    pub const fn line(self, line: Line) -> bool {
        match line {
            Line::A => self.line_a,
            Line::B => self.line_b,
        }
    }
}

impl fmt::Display for OutputPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", u8::from(self.line_a), u8::from(self.line_b))
    }
}
