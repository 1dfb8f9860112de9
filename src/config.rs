//! System configuration parameters
//!
//! Strongly typed replacement for the host framework's component schema:
//! two required output pins, optional sensor / switch / diagnostic entity
//! bindings, arbitration thresholds, and loop timing.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pins;

/// Identifier of an entity in the host framework (sensor, switch, …).
pub type EntityId = heapless::String<32>;

/// Arbitration thresholds.  A reading strictly below a threshold makes
/// the corresponding rule fire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Price level below which running is recommended.
    pub low_price: f32,
    /// Temperature (°C) below which pre-heating is recommended.
    pub low_temperature_c: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low_price: 0.10,
            low_temperature_c: 17.0,
        }
    }
}

/// Core SG-Ready configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SgReadyConfig {
    // --- Outputs (required) ---
    /// GPIO driving SG-Ready contact A
    pub pin_a_gpio: i32,
    /// GPIO driving SG-Ready contact B
    pub pin_b_gpio: i32,

    // --- Inputs ---
    pub temperature_sensor: Option<EntityId>,
    pub price_level_sensor: Option<EntityId>,
    pub force_block_switch: Option<EntityId>,
    pub force_encourage_switch: Option<EntityId>,

    // --- Diagnostics ---
    /// Binary sensor mirroring line A
    pub line_a_binary_sensor: Option<EntityId>,
    /// Binary sensor mirroring line B
    pub line_b_binary_sensor: Option<EntityId>,
    /// Text sensor carrying the mode label
    pub mode_text_sensor: Option<EntityId>,

    pub thresholds: Thresholds,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub tick_interval_ms: u32,
    /// Minimum time between sensor-driven mode changes (seconds, 0 = off)
    pub min_dwell_secs: u32,
}

impl Default for SgReadyConfig {
    fn default() -> Self {
        Self {
            pin_a_gpio: pins::SGREADY_A_GPIO,
            pin_b_gpio: pins::SGREADY_B_GPIO,

            temperature_sensor: None,
            price_level_sensor: None,
            force_block_switch: None,
            force_encourage_switch: None,

            line_a_binary_sensor: None,
            line_b_binary_sensor: None,
            mode_text_sensor: None,

            thresholds: Thresholds::default(),

            tick_interval_ms: 1000, // 1 Hz
            min_dwell_secs: 0,
        }
    }
}

impl SgReadyConfig {
    /// Reject configurations the controller cannot run with.
    ///
    /// Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pin_a_gpio == self.pin_b_gpio {
            return Err(ConfigError::SharedPin);
        }
        if !self.thresholds.low_price.is_finite() {
            return Err(ConfigError::InvalidThreshold("low_price"));
        }
        if !self.thresholds.low_temperature_c.is_finite() {
            return Err(ConfigError::InvalidThreshold("low_temperature_c"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTiming("tick_interval_ms"));
        }
        Ok(())
    }

    /// Dwell window expressed in control ticks, rounded up.
    pub fn min_dwell_ticks(&self) -> u32 {
        let dwell_ms = u64::from(self.min_dwell_secs) * 1000;
        let tick_ms = u64::from(self.tick_interval_ms.max(1));
        dwell_ms.div_ceil(tick_ms).min(u64::from(u32::MAX)) as u32
    }

    /// Helper for building entity ids from literals.  Truncates silently
    /// at the capacity of [`EntityId`].
    pub fn entity(name: &str) -> EntityId {
        let mut id = EntityId::new();
        for c in name.chars() {
            if id.push(c).is_err() {
                break;
            }
        }
        id
    }
}
