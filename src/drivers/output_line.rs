//! SG-Ready relay output line.
//!
//! Wraps any `embedded_hal` output pin and remembers the last commanded
//! level so callers can read it back without touching the hardware.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: `P` is an `esp_idf_hal::gpio::PinDriver` in output mode.
//! On host/test: `P` is any mock implementing `OutputPin`.

use embedded_hal::digital::{OutputPin, PinState};

use crate::control::mode::Line;
use crate::error::OutputError;

pub struct OutputLine<P> {
    line: Line,
    pin: P,
    level: bool,
    writes: u32,
    failures: u32,
}

impl<P: OutputPin> OutputLine<P> {
    /// Wrap a pin.  No level is written until the first [`write`].
    ///
    /// [`write`]: Self::write
    pub fn new(line: Line, pin: P) -> Self {
        Self {
            line,
            pin,
            level: false,
            writes: 0,
            failures: 0,
        }
    }

    /// Drive the pin.  The level counts as commanded even if the pin
    /// reports an error; there is no retry.
    pub fn write(&mut self, level: bool) -> Result<(), OutputError> {
        self.level = level;
        self.writes = self.writes.wrapping_add(1);
        self.pin.set_state(PinState::from(level)).map_err(|_| {
            self.failures = self.failures.wrapping_add(1);
            OutputError::WriteFailed(self.line)
        })
    }

    /// Last commanded level.
    pub fn level(&self) -> bool {
        self.level
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// Number of writes issued since construction.
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    /// Number of writes the pin rejected.
    pub fn failure_count(&self) -> u32 {
        self.failures
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}
