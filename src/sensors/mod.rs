//! Input subsystem — sensor and switch mailboxes plus the aggregating
//! [`InputBank`].
//!
//! The bank holds references to whichever inputs are wired and produces an
//! [`InputSnapshot`] each tick.  Inputs are usually `static`s written by the
//! host framework; the bank only reads them.

pub mod reading;
pub mod switch;

use core::ptr;

use log::info;
use serde::Serialize;

use crate::error::ConfigError;
use reading::SensorInput;
use switch::SwitchInput;

/// Everything the arbiter looks at, captured once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InputSnapshot {
    /// Last temperature reading (°C), if the sensor is wired and reported.
    pub temperature_c: Option<f32>,
    /// Last price-level reading, if the sensor is wired and reported.
    pub price_level: Option<f32>,
    /// "Force block" override switch.
    pub force_block: bool,
    /// "Force encourage" override switch.
    pub force_encourage: bool,
}

/// Which override a registered switch ended up driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideSlot {
    ForceBlock,
    ForceEncourage,
}

/// The wired inputs.  Every input is optional; an absent one behaves like
/// a sensor that never reported or a switch that is never active.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputBank<'a> {
    temperature: Option<&'a SensorInput>,
    price_level: Option<&'a SensorInput>,
    force_block: Option<&'a SwitchInput>,
    force_encourage: Option<&'a SwitchInput>,
}

impl<'a> InputBank<'a> {
    /// A bank with nothing wired.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, sensor: &'a SensorInput) -> Self {
        self.temperature = Some(sensor);
        self
    }

    pub fn with_price_level(mut self, sensor: &'a SensorInput) -> Self {
        self.price_level = Some(sensor);
        self
    }

    pub fn with_force_block(mut self, sw: &'a SwitchInput) -> Self {
        self.force_block = Some(sw);
        self
    }

    pub fn with_force_encourage(mut self, sw: &'a SwitchInput) -> Self {
        self.force_encourage = Some(sw);
        self
    }

    /// Place a switch into the first free override slot: force block
    /// first, then force encourage.
    ///
    /// The first registered switch therefore **blocks** the heat pump
    /// when active.  Configurations whose first switch meant "allow
    /// mode 4" (ordered operation) must be re-ordered, or wired with
    /// [`with_force_encourage`](Self::with_force_encourage) explicitly.
    pub fn register_switch(&mut self, sw: &'a SwitchInput) -> Result<OverrideSlot, ConfigError> {
        let already = [self.force_block, self.force_encourage]
            .into_iter()
            .flatten()
            .any(|s| ptr::eq(s, sw));
        if already {
            return Err(ConfigError::DuplicateSwitch);
        }

        if self.force_block.is_none() {
            self.force_block = Some(sw);
            info!("Registered switch '{}' as force block", sw.name());
            Ok(OverrideSlot::ForceBlock)
        } else if self.force_encourage.is_none() {
            self.force_encourage = Some(sw);
            info!("Registered switch '{}' as force encourage", sw.name());
            Ok(OverrideSlot::ForceEncourage)
        } else {
            Err(ConfigError::TooManySwitches)
        }
    }

    pub fn temperature(&self) -> Option<&'a SensorInput> {
        self.temperature
    }

    pub fn price_level(&self) -> Option<&'a SensorInput> {
        self.price_level
    }

    pub fn force_block(&self) -> Option<&'a SwitchInput> {
        self.force_block
    }

    pub fn force_encourage(&self) -> Option<&'a SwitchInput> {
        self.force_encourage
    }

    /// Read every wired input.  Never blocks: a missing value is reported
    /// as `None`, not waited for.
    pub fn capture(&self) -> InputSnapshot {
        InputSnapshot {
            temperature_c: self.temperature.and_then(SensorInput::current_value),
            price_level: self.price_level.and_then(SensorInput::current_value),
            force_block: self.force_block.is_some_and(SwitchInput::is_active),
            force_encourage: self.force_encourage.is_some_and(SwitchInput::is_active),
        }
    }
}
