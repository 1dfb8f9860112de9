//! Application core — the SG-Ready controller and its port traits.
//!
//! Everything here is hardware-agnostic: output lines are
//! `embedded_hal` pins, inputs are lock-free mailboxes, diagnostics go
//! through [`ports::DiagnosticsSink`].

pub mod controller;
pub mod ports;
