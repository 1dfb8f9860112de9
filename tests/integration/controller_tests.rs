//! Integration tests: controller lifecycle, change suppression, dwell
//! guard, and fault tolerance of the output path.

use sgready::control::arbiter::Rule;
use sgready::control::encoder::Encoding;
use sgready::sensors::InputBank;
use sgready::sensors::reading::SensorInput;
use sgready::sensors::switch::SwitchInput;
use sgready::{Mode, OutputPattern, SgReadyConfig, SgReadyController};

use super::mock_hw::{MockPin, RecordingSink, controller, total_writes, wired_config};

fn dwell_config(ticks: u32) -> SgReadyConfig {
    SgReadyConfig {
        tick_interval_ms: 1000,
        min_dwell_secs: ticks,
        ..wired_config()
    }
}

// ── Lifecycle ─────────────────────────────────────────────────

#[test]
fn setup_drives_failsafe_normal() {
    let mut ctl = controller(wired_config(), InputBank::new());
    ctl.setup();

    assert_eq!(ctl.mode(), Mode::Normal);
    assert_eq!(ctl.pattern(), Some(OutputPattern::new(false, false)));
    assert_eq!(ctl.encoder().line_a().pin().writes, vec![false]);
    assert_eq!(ctl.encoder().line_b().pin().writes, vec![false]);
    assert_eq!(ctl.reporter().sink().modes(), vec!["NORMAL"]);
}

#[test]
fn tick_after_setup_writes_nothing_when_idle() {
    let mut ctl = controller(wired_config(), InputBank::new());
    ctl.setup();
    let writes = total_writes(&ctl);
    let published = ctl.reporter().sink().events.len();

    for _ in 0..10 {
        let outcome = ctl.tick();
        assert!(!outcome.changed);
    }

    assert_eq!(total_writes(&ctl), writes);
    assert_eq!(ctl.reporter().sink().events.len(), published);
    assert_eq!(ctl.tick_count(), 10);
}

#[test]
fn unwired_diagnostics_publish_nothing() {
    let mut ctl = controller(SgReadyConfig::default(), InputBank::new());
    ctl.setup();
    assert!(ctl.reporter().sink().events.is_empty());
    // Cached observables are still available for status queries.
    assert_eq!(ctl.reporter().mode_label(), Some("NORMAL"));
}

// ── Overrides ─────────────────────────────────────────────────

#[test]
fn releasing_block_falls_back_to_sensors() {
    let price = SensorInput::new("price");
    let block = SwitchInput::new("block");
    let inputs = InputBank::new().with_price_level(&price).with_force_block(&block);
    let mut ctl = controller(wired_config(), inputs);
    ctl.setup();

    price.publish(0.01);
    block.set(true);
    assert_eq!(ctl.tick().mode, Mode::Blocked);

    block.set(false);
    let outcome = ctl.tick();
    assert_eq!(outcome.mode, Mode::Recommended);
    assert_eq!(outcome.decision.rule, Rule::LowPrice);
}

#[test]
fn registered_switches_drive_overrides() {
    let first = SwitchInput::new("utility");
    let second = SwitchInput::new("boost");
    let mut inputs = InputBank::new();
    inputs.register_switch(&first).unwrap();
    inputs.register_switch(&second).unwrap();
    let mut ctl = controller(wired_config(), inputs);
    ctl.setup();

    second.set(true);
    assert_eq!(ctl.tick().mode, Mode::ForcedOn);
    first.set(true);
    assert_eq!(ctl.tick().mode, Mode::Blocked);
}

// ── Dwell guard ───────────────────────────────────────────────

#[test]
fn dwell_holds_flapping_price() {
    let price = SensorInput::new("price");
    let inputs = InputBank::new().with_price_level(&price);
    let mut ctl = controller(dwell_config(3), inputs);
    ctl.setup();

    price.publish(0.05);
    let outcome = ctl.tick();
    assert_eq!(outcome.mode, Mode::Recommended);
    assert!(!outcome.held);

    // Price bounces back immediately: held for the dwell window.
    price.publish(0.50);
    let outcome = ctl.tick();
    assert!(outcome.held);
    assert_eq!(outcome.decision.mode, Mode::Normal);
    assert_eq!(outcome.mode, Mode::Recommended);
    assert_eq!(ctl.status().dwell_remaining_ticks, 2);

    assert!(ctl.tick().held);
    let outcome = ctl.tick();
    assert!(!outcome.held);
    assert_eq!(outcome.mode, Mode::Normal);
}

#[test]
fn dwell_never_delays_block() {
    let price = SensorInput::new("price");
    let block = SwitchInput::new("block");
    let inputs = InputBank::new().with_price_level(&price).with_force_block(&block);
    let mut ctl = controller(dwell_config(600), inputs);
    ctl.setup();

    price.publish(0.05);
    assert_eq!(ctl.tick().mode, Mode::Recommended);

    block.set(true);
    let outcome = ctl.tick();
    assert!(!outcome.held);
    assert_eq!(outcome.mode, Mode::Blocked);
    assert_eq!(ctl.pattern(), Some(OutputPattern::new(true, false)));
}

#[test]
fn dwell_applies_after_override_release() {
    let price = SensorInput::new("price");
    let encourage = SwitchInput::new("encourage");
    let inputs = InputBank::new()
        .with_price_level(&price)
        .with_force_encourage(&encourage);
    let mut ctl = controller(dwell_config(2), inputs);
    ctl.setup();

    encourage.set(true);
    assert_eq!(ctl.tick().mode, Mode::ForcedOn);

    // Sensor-driven fallback waits out the window opened by the override.
    encourage.set(false);
    let outcome = ctl.tick();
    assert!(outcome.held);
    assert_eq!(outcome.mode, Mode::ForcedOn);
    assert_eq!(ctl.tick().mode, Mode::Normal);
}

// ── Output path ───────────────────────────────────────────────

#[test]
fn broken_pin_does_not_stall_the_loop() {
    let block = SwitchInput::new("block");
    let inputs = InputBank::new().with_force_block(&block);
    let mut ctl = SgReadyController::new(
        wired_config(),
        MockPin::broken(),
        MockPin::new(),
        inputs,
        RecordingSink::default(),
    )
    .unwrap();
    ctl.setup();

    block.set(true);
    let outcome = ctl.tick();
    assert_eq!(outcome.mode, Mode::Blocked);
    assert!(outcome.changed);
    assert!(ctl.encoder().line_a().level());
    assert!(ctl.encoder().line_a().failure_count() >= 1);

    // No retry on the next tick.
    let writes = total_writes(&ctl);
    ctl.tick();
    assert_eq!(total_writes(&ctl), writes);
}

#[test]
fn shared_pattern_change_is_not_republished() {
    // Recommended and ForcedOn share a pattern in this table.
    let encoding = Encoding::new([
        OutputPattern::new(true, false),
        OutputPattern::new(false, false),
        OutputPattern::new(false, true),
        OutputPattern::new(false, true),
    ]);
    let price = SensorInput::new("price");
    let encourage = SwitchInput::new("encourage");
    let inputs = InputBank::new()
        .with_price_level(&price)
        .with_force_encourage(&encourage);
    let mut ctl = SgReadyController::with_encoding(
        wired_config(),
        encoding,
        MockPin::new(),
        MockPin::new(),
        inputs,
        RecordingSink::default(),
    )
    .unwrap();
    ctl.setup();

    price.publish(0.01);
    assert!(ctl.tick().changed);
    let writes = total_writes(&ctl);
    let published = ctl.reporter().sink().events.len();

    encourage.set(true);
    let outcome = ctl.tick();
    assert_eq!(outcome.mode, Mode::ForcedOn);
    assert!(!outcome.changed);
    assert_eq!(total_writes(&ctl), writes);
    assert_eq!(ctl.reporter().sink().events.len(), published);
}

#[test]
fn status_tracks_inputs_and_writes() {
    let temp = SensorInput::new("temp");
    let inputs = InputBank::new().with_temperature(&temp);
    let mut ctl = controller(wired_config(), inputs);
    ctl.setup();

    temp.publish(5.5);
    ctl.tick();

    let status = ctl.status();
    assert_eq!(status.mode, Mode::Recommended);
    assert_eq!(status.rule, Rule::LowTemperature);
    assert_eq!(status.inputs.temperature_c, Some(5.5));
    assert_eq!(status.output_writes, 3);
}
