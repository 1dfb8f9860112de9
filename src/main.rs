//! SG-Ready Controller Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Host framework / ISRs                                       │
//! │    TEMPERATURE  PRICE_LEVEL  HOST_BLOCK   FORCE_ENCOURAGE    │
//! │    (static lock-free mailboxes)                              │
//! │  ──────────────────── InputBank ───────────────────────      │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │          SgReadyController (pure logic)                │  │
//! │  │  Arbiter · DwellGuard · Encoder · Diagnostics          │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │  ──────────────── OutputPin A / B ─────────────────────      │
//! │    SG-Ready relays → heat pump                               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyInputPin, AnyOutputPin, PinDriver, Pull};
use log::{info, warn};

use sgready::adapters::log_sink::LogDiagnosticsSink;
use sgready::adapters::time::MonotonicClock;
use sgready::config::SgReadyConfig;
use sgready::pins;
use sgready::sensors::InputBank;
use sgready::sensors::reading::SensorInput;
use sgready::sensors::switch::SwitchInput;
use sgready::SgReadyController;

// ── Shared inputs ─────────────────────────────────────────────
//
// TEMPERATURE, PRICE_LEVEL, FORCE_ENCOURAGE and HOST_BLOCK are the host
// integration's write side (entity callbacks); until one reports, the
// controller sees "absent" / inactive and stays NORMAL.
//
// FORCE_BLOCK is written only by the control loop: the utility contact
// OR'd with HOST_BLOCK.  Host code must set HOST_BLOCK, never FORCE_BLOCK.

pub static TEMPERATURE: SensorInput = SensorInput::new("temperature");
pub static PRICE_LEVEL: SensorInput = SensorInput::new("price_level");
pub static HOST_BLOCK: SwitchInput = SwitchInput::new("host_block");
pub static FORCE_ENCOURAGE: SwitchInput = SwitchInput::new("force_encourage");
static FORCE_BLOCK: SwitchInput = SwitchInput::new("force_block");

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("SGReady controller v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = SgReadyConfig {
        temperature_sensor: Some(SgReadyConfig::entity("sensor.outdoor_temperature")),
        price_level_sensor: Some(SgReadyConfig::entity("sensor.price_level")),
        force_block_switch: Some(SgReadyConfig::entity("switch.utility_block")),
        force_encourage_switch: Some(SgReadyConfig::entity("switch.force_encourage")),
        line_a_binary_sensor: Some(SgReadyConfig::entity("binary_sensor.sgready_a")),
        line_b_binary_sensor: Some(SgReadyConfig::entity("binary_sensor.sgready_b")),
        mode_text_sensor: Some(SgReadyConfig::entity("text_sensor.sgready_mode")),
        min_dwell_secs: 600,
        ..SgReadyConfig::default()
    };

    // ── 3. Peripherals ────────────────────────────────────────
    // SAFETY: each GPIO number is claimed exactly once, here, before the
    // control loop starts; nothing else in the firmware touches them.
    let pin_a = PinDriver::output(unsafe { AnyOutputPin::new(config.pin_a_gpio) })?;
    let pin_b = PinDriver::output(unsafe { AnyOutputPin::new(config.pin_b_gpio) })?;
    let mut utility_contact =
        PinDriver::input(unsafe { AnyInputPin::new(pins::UTILITY_BLOCK_GPIO) })?;
    utility_contact.set_pull(Pull::Up)?;

    // ── 4. Wire inputs and build the controller ───────────────
    let inputs = InputBank::new()
        .with_temperature(&TEMPERATURE)
        .with_price_level(&PRICE_LEVEL)
        .with_force_block(&FORCE_BLOCK)
        .with_force_encourage(&FORCE_ENCOURAGE);

    let tick_ms = config.tick_interval_ms;
    let mut controller =
        SgReadyController::new(config, pin_a, pin_b, inputs, LogDiagnosticsSink::new())
            .map_err(|e| anyhow::anyhow!("controller init failed: {e}"))?;

    controller.dump_config();
    controller.setup();

    // ── 5. Control loop ───────────────────────────────────────
    let clock = MonotonicClock::new();
    let mut next_tick_ms = clock.uptime_ms();

    loop {
        // Utility contact is active-low.
        FORCE_BLOCK.set_any([utility_contact.is_low(), HOST_BLOCK.is_active()]);

        let outcome = controller.tick();
        if outcome.changed {
            match serde_json::to_string(&controller.status()) {
                Ok(json) => info!("STATUS | {}", json),
                Err(e) => warn!("status serialisation failed: {}", e),
            }
        }

        next_tick_ms += u64::from(tick_ms);
        FreeRtos::delay_ms(clock.until(next_tick_ms) as u32);
    }
}
