//! Mode → output pattern encoding and idempotent application.
//!
//! [`ModeEncoder::apply`] touches the hardware only when the pattern
//! differs from the one last applied, and only the lines whose level
//! changes.  Write order is falling A, falling B, rising B, rising A.
//! With the SG-Ready table no transition passes through `10` (Blocked)
//! unless Blocked is the target: `00 -> 11` goes via `01`, `11 -> 00`
//! via `01`, and mixed transitions via `00`.

use embedded_hal::digital::OutputPin;
use log::{debug, warn};

use crate::control::mode::{Line, Mode, OutputPattern};
use crate::drivers::output_line::OutputLine;

/// Mode → pattern table, indexed by SG-Ready mode number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoding {
    table: [OutputPattern; 4],
}

impl Encoding {
    /// The standard SG-Ready contact assignment.
    pub const SG_READY: Encoding = Encoding::new([
        OutputPattern::new(true, false),  // Blocked
        OutputPattern::new(false, false), // Normal
        OutputPattern::new(false, true),  // Recommended
        OutputPattern::new(true, true),   // ForcedOn
    ]);

    /// Custom table, entries in [`Mode::ALL`] order.
    pub const fn new(table: [OutputPattern; 4]) -> Self {
        Self { table }
    }

    pub fn encode(&self, mode: Mode) -> OutputPattern {
        self.table[mode.index()]
    }

    /// First mode mapping to `pattern`, if any.
    pub fn decode(&self, pattern: OutputPattern) -> Option<Mode> {
        Mode::ALL.into_iter().find(|m| self.encode(*m) == pattern)
    }

    /// No two modes share a pattern.
    pub fn is_injective(&self) -> bool {
        self.table
            .iter()
            .enumerate()
            .all(|(i, p)| !self.table[i + 1..].contains(p))
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self::SG_READY
    }
}

pub struct ModeEncoder<A, B> {
    encoding: Encoding,
    line_a: OutputLine<A>,
    line_b: OutputLine<B>,
    /// `None` until the first apply; forces the first write.
    applied: Option<OutputPattern>,
}

impl<A: OutputPin, B: OutputPin> ModeEncoder<A, B> {
    pub fn new(encoding: Encoding, pin_a: A, pin_b: B) -> Self {
        Self {
            encoding,
            line_a: OutputLine::new(Line::A, pin_a),
            line_b: OutputLine::new(Line::B, pin_b),
            applied: None,
        }
    }

    /// Drive the lines for `mode`.  Returns `true` if the applied pattern
    /// changed; repeated calls with the same pattern write nothing.
    pub fn apply(&mut self, mode: Mode) -> bool {
        let pattern = self.encoding.encode(mode);
        if self.applied == Some(pattern) {
            return false;
        }

        let prev = self.applied;
        let needs = |line: Line| prev.is_none_or(|p| p.line(line) != pattern.line(line));

        // A leads on the way down and trails on the way up.
        const ORDER: [(Line, bool); 4] = [
            (Line::A, false),
            (Line::B, false),
            (Line::B, true),
            (Line::A, true),
        ];
        for (line, level) in ORDER {
            if !needs(line) || pattern.line(line) != level {
                continue;
            }
            let result = match line {
                Line::A => self.line_a.write(level),
                Line::B => self.line_b.write(level),
            };
            if let Err(e) = result {
                warn!("SG-Ready {}: {}", mode, e);
            }
        }

        debug!("SG-Ready pattern {} applied for {}", pattern, mode);
        self.applied = Some(pattern);
        true
    }

    /// Last applied pattern, `None` before the first apply.
    pub fn applied(&self) -> Option<OutputPattern> {
        self.applied
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn line_a(&self) -> &OutputLine<A> {
        &self.line_a
    }

    pub fn line_b(&self) -> &OutputLine<B> {
        &self.line_b
    }

    /// Total writes issued across both lines.
    pub fn write_count(&self) -> u32 {
        self.line_a.write_count() + self.line_b.write_count()
    }
}
