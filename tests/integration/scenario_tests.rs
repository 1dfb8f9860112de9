//! End-to-end scenarios: inputs → controller → pins and diagnostics.

use sgready::sensors::InputBank;
use sgready::sensors::reading::SensorInput;
use sgready::sensors::switch::SwitchInput;
use sgready::{Mode, OutputPattern, SgReadyConfig, Thresholds};

use super::mock_hw::{Published, controller, pin_levels, total_writes, wired_config};

fn config_with_price_threshold(low_price: f32) -> SgReadyConfig {
    SgReadyConfig {
        thresholds: Thresholds {
            low_price,
            ..Thresholds::default()
        },
        ..wired_config()
    }
}

#[test]
fn cheap_power_recommends_running() {
    let price = SensorInput::new("price");
    let block = SwitchInput::new("block");
    let encourage = SwitchInput::new("encourage");
    let inputs = InputBank::new()
        .with_price_level(&price)
        .with_force_block(&block)
        .with_force_encourage(&encourage);
    let mut ctl = controller(config_with_price_threshold(0.10), inputs);
    ctl.setup();

    price.publish(0.05);
    let outcome = ctl.tick();

    assert_eq!(outcome.mode, Mode::Recommended);
    assert!(outcome.changed);
    assert_eq!(ctl.pattern(), Some(OutputPattern::new(false, true)));
    assert_eq!(pin_levels(&ctl), (Some(false), Some(true)));
}

#[test]
fn utility_block_beats_cheap_power() {
    let price = SensorInput::new("price");
    let block = SwitchInput::new("block");
    let inputs = InputBank::new().with_price_level(&price).with_force_block(&block);
    let mut ctl = controller(config_with_price_threshold(0.10), inputs);
    ctl.setup();

    block.set(true);
    price.publish(0.01);
    let outcome = ctl.tick();

    assert_eq!(outcome.mode, Mode::Blocked);
    assert_eq!(ctl.pattern(), Some(OutputPattern::new(true, false)));
    assert_eq!(pin_levels(&ctl), (Some(true), Some(false)));
}

#[test]
fn idle_inputs_stay_normal_without_rewriting() {
    let temp = SensorInput::new("temp");
    let price = SensorInput::new("price");
    let block = SwitchInput::new("block");
    let encourage = SwitchInput::new("encourage");
    let inputs = InputBank::new()
        .with_temperature(&temp)
        .with_price_level(&price)
        .with_force_block(&block)
        .with_force_encourage(&encourage);
    let mut ctl = controller(wired_config(), inputs);

    let first = ctl.tick();
    assert_eq!(first.mode, Mode::Normal);
    assert_eq!(ctl.pattern(), Some(OutputPattern::new(false, false)));
    let writes_after_first = total_writes(&ctl);

    let second = ctl.tick();
    assert_eq!(second.mode, Mode::Normal);
    assert!(!second.changed);
    assert_eq!(total_writes(&ctl), writes_after_first);
}

#[test]
fn both_overrides_resolve_to_blocked() {
    let block = SwitchInput::new("block");
    let encourage = SwitchInput::new("encourage");
    let inputs = InputBank::new()
        .with_force_block(&block)
        .with_force_encourage(&encourage);
    let mut ctl = controller(wired_config(), inputs);
    ctl.setup();

    encourage.set(true);
    block.set(true);
    let outcome = ctl.tick();

    assert_eq!(outcome.mode, Mode::Blocked);
    assert_eq!(ctl.reporter().mode_label(), Some("BLOCKED"));
}

#[test]
fn mode_change_publishes_label_and_lines() {
    let encourage = SwitchInput::new("encourage");
    let inputs = InputBank::new().with_force_encourage(&encourage);
    let mut ctl = controller(wired_config(), inputs);
    ctl.setup();

    encourage.set(true);
    ctl.tick();

    let events = &ctl.reporter().sink().events;
    assert_eq!(
        events[events.len() - 3..],
        [
            Published::Mode("FORCED_ON".into()),
            Published::Line(sgready::Line::A, true),
            Published::Line(sgready::Line::B, true),
        ]
    );
}

#[test]
fn cold_weather_preheats_until_it_warms_up() {
    let temp = SensorInput::new("temp");
    let inputs = InputBank::new().with_temperature(&temp);
    let mut ctl = controller(wired_config(), inputs);
    ctl.setup();

    temp.publish(3.0);
    assert_eq!(ctl.tick().mode, Mode::Recommended);

    temp.publish(21.0);
    assert_eq!(ctl.tick().mode, Mode::Normal);
    assert_eq!(ctl.reporter().sink().modes(), vec!["NORMAL", "RECOMMENDED", "NORMAL"]);
}

#[test]
fn sensor_going_unavailable_degrades_to_normal() {
    let price = SensorInput::new("price");
    let inputs = InputBank::new().with_price_level(&price);
    let mut ctl = controller(wired_config(), inputs);
    ctl.setup();

    price.publish(0.02);
    assert_eq!(ctl.tick().mode, Mode::Recommended);

    price.publish(f32::NAN);
    assert_eq!(ctl.tick().mode, Mode::Normal);
}
