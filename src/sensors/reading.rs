//! Numeric sensor input (temperature, price level).
//!
//! The host framework pushes readings from whatever context it runs in
//! (callback, polling task, ISR); the control loop reads the latest one
//! once per tick.
//!
//! ## Handoff
//!
//! The reading lives in a single `AtomicU32` holding the `f32` bits, so a
//! reader can never observe half of an update.  "No value" is a reserved
//! quiet-NaN pattern.  Any NaN the host publishes (the usual "sensor
//! unavailable" marker) collapses to "no value" as well, so a missing
//! reading is never mistaken for zero.

use core::sync::atomic::{AtomicU32, Ordering};

/// Reserved NaN payload marking an empty slot.
const NO_VALUE: u32 = 0x7FC0_5E5E;

/// Single-slot, lock-free mailbox for the last known sensor reading.
pub struct SensorInput {
    name: &'static str,
    bits: AtomicU32,
}

impl SensorInput {
    /// An input that has never reported.  `const` so it can live in a
    /// `static` shared with the producer context.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            bits: AtomicU32::new(NO_VALUE),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Producer side: store a new reading.  NaN clears the slot.
    pub fn publish(&self, value: f32) {
        let bits = if value.is_nan() {
            NO_VALUE
        } else {
            value.to_bits()
        };
        self.bits.store(bits, Ordering::Release);
    }

    /// Producer side: forget the last reading (sensor went unavailable).
    pub fn clear(&self) {
        self.bits.store(NO_VALUE, Ordering::Release);
    }

    /// Last known reading, or `None` if nothing valid was ever reported.
    pub fn current_value(&self) -> Option<f32> {
        match self.bits.load(Ordering::Acquire) {
            NO_VALUE => None,
            bits => Some(f32::from_bits(bits)),
        }
    }

    pub fn has_value(&self) -> bool {
        self.current_value().is_some()
    }
}

impl core::fmt::Debug for SensorInput {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SensorInput")
            .field("name", &self.name)
            .field("value", &self.current_value())
            .finish()
    }
}
