//! Fuzz target: `ModeArbiter::evaluate`
//!
//! Builds thresholds and an input snapshot from raw bytes (any f32 bit
//! pattern, NaN and infinities included) and checks the priority order
//! holds for every combination.
//!
//! cargo fuzz run fuzz_arbiter

#![no_main]

use libfuzzer_sys::fuzz_target;
use sgready::control::arbiter::{ModeArbiter, Rule};
use sgready::sensors::InputSnapshot;
use sgready::{Mode, Thresholds};

fn f32_at(data: &[u8], at: usize) -> f32 {
    f32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }

    let flags = data[16];
    let reading = |bit: u8, value: f32| (flags & bit != 0).then_some(value);

    let thresholds = Thresholds {
        low_price: f32_at(data, 0),
        low_temperature_c: f32_at(data, 4),
    };
    let snap = InputSnapshot {
        price_level: reading(0b0001, f32_at(data, 8)),
        temperature_c: reading(0b0010, f32_at(data, 12)),
        force_block: flags & 0b0100 != 0,
        force_encourage: flags & 0b1000 != 0,
    };

    let decision = ModeArbiter::new(thresholds).evaluate(&snap);

    if snap.force_block {
        assert_eq!(decision.mode, Mode::Blocked);
    } else if snap.force_encourage {
        assert_eq!(decision.mode, Mode::ForcedOn);
    } else {
        assert!(matches!(decision.mode, Mode::Normal | Mode::Recommended));
    }
    if snap.price_level.is_none() && snap.temperature_c.is_none() && !decision.rule.is_override() {
        assert_eq!(decision.rule, Rule::Default);
    }
});
