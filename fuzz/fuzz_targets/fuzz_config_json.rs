//! Fuzz target: `SgReadyConfig` JSON decoding + validation
//!
//! Arbitrary bytes must never panic the decoder or `validate()`, and any
//! config that validates must have distinct pins and finite thresholds.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use sgready::SgReadyConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<SgReadyConfig>(data) else {
        return;
    };

    if config.validate().is_ok() {
        assert_ne!(config.pin_a_gpio, config.pin_b_gpio);
        assert!(config.thresholds.low_price.is_finite());
        assert!(config.thresholds.low_temperature_c.is_finite());
        assert!(config.tick_interval_ms > 0);
        let _ = config.min_dwell_ticks();
    }
});
