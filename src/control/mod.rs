//! Mode decision and output encoding.

pub mod arbiter;
pub mod encoder;
pub mod guard;
pub mod mode;
