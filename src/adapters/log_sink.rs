//! Log-based diagnostics sink adapter.
//!
//! Implements [`DiagnosticsSink`] by writing published observables to the
//! logger (UART / USB-CDC on target).  A host-entity adapter would
//! implement the same trait.

use log::info;

use crate::app::ports::DiagnosticsSink;
use crate::control::mode::Line;

/// Adapter that logs every published observable to the serial console.
#[derive(Debug, Default)]
pub struct LogDiagnosticsSink;

impl LogDiagnosticsSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticsSink for LogDiagnosticsSink {
    fn publish_mode(&mut self, label: &str) {
        info!("DIAG | mode={}", label);
    }

    fn publish_line_state(&mut self, line: Line, state: bool) {
        info!("DIAG | line_{}={}", line, if state { "ON" } else { "OFF" });
    }
}
