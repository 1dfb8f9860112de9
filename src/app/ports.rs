//! Port traits — the boundary between the mode controller and the host
//! framework.
//!
//! ```text
//!   SensorInput / SwitchInput ──▶ SgReadyController ──▶ OutputPin (A, B)
//!                                         │
//!                                         └──▶ DiagnosticsSink
//! ```
//!
//! Output lines use `embedded_hal::digital::OutputPin` directly.  Sensor
//! and switch values arrive through the lock-free mailboxes in
//! [`crate::sensors`].  The only port defined here is the outbound
//! diagnostics channel.

use crate::control::mode::Line;

// ───────────────────────────────────────────────────────────────
// Diagnostics sink (driven adapter: controller → host entities)
// ───────────────────────────────────────────────────────────────

/// Receives published observables.  Fire-and-forget: implementations
/// must not block the control loop.
pub trait DiagnosticsSink {
    /// New value for the mode text sensor.
    fn publish_mode(&mut self, label: &str);

    /// New value for the binary sensor mirroring `line`.
    fn publish_line_state(&mut self, line: Line, state: bool);
}

impl<T: DiagnosticsSink + ?Sized> DiagnosticsSink for &mut T {
    fn publish_mode(&mut self, label: &str) {
        (**self).publish_mode(label);
    }

    fn publish_line_state(&mut self, line: Line, state: bool) {
        (**self).publish_line_state(line, state);
    }
}
