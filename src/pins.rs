//! GPIO pin assignments for the SG-Ready controller board.
//!
//! Single source of truth for the default wiring.  [`SgReadyConfig`]
//! starts from these values; a deployment can override them.
//!
//! [`SgReadyConfig`]: crate::config::SgReadyConfig

// ---------------------------------------------------------------------------
// SG-Ready relay outputs
// ---------------------------------------------------------------------------

/// Digital output: relay for SG-Ready contact A (active HIGH).
pub const SGREADY_A_GPIO: i32 = 4;
/// Digital output: relay for SG-Ready contact B (active HIGH).
pub const SGREADY_B_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Digital input: utility blocking contact.  LOW = utility requests block.
/// Feeds the "force block" switch on boards that have the terminal fitted.
pub const UTILITY_BLOCK_GPIO: i32 = 6;
