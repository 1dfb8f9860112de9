//! SG-Ready controller firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code lives in the binary or is guarded
//! by `#[cfg(target_os = "espidf")]`.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;

pub use app::controller::{ControllerStatus, SgReadyController, TickOutcome};
pub use config::{SgReadyConfig, Thresholds};
pub use control::mode::{Line, Mode, OutputPattern};
pub use error::{Error, Result};
