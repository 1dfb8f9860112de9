//! Unified error types for the SG-Ready firmware.
//!
//! All variants are `Copy` so they pass through the control loop without
//! allocation.
//!
//! The arbitration path itself is infallible: only construction and
//! configuration validation return [`Error`].  Output-line write failures
//! are reported per line as [`OutputError`] and logged by the encoder,
//! never propagated out of a tick.

use core::fmt;

use crate::control::mode::Line;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A threshold is NaN or infinite.  Names the offending field.
    InvalidThreshold(&'static str),
    /// Line A and line B are assigned to the same GPIO.
    SharedPin,
    /// More than two override switches were registered.
    TooManySwitches,
    /// The same switch was registered into both override slots.
    DuplicateSwitch,
    /// A timing parameter is out of range.  Names the offending field.
    InvalidTiming(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold(field) => write!(f, "invalid threshold: {field}"),
            Self::SharedPin => write!(f, "line A and line B share a pin"),
            Self::TooManySwitches => write!(f, "more than 2 override switches"),
            Self::DuplicateSwitch => write!(f, "switch registered twice"),
            Self::InvalidTiming(field) => write!(f, "invalid timing: {field}"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputError {
    /// The underlying pin rejected the level.
    WriteFailed(Line),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed(line) => write!(f, "write to line {line} failed"),
        }
    }
}

impl core::error::Error for OutputError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
