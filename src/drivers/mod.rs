//! Actuator drivers.

pub mod output_line;
