//! Fuzz target for engine config parsing and validation.
//!
//! Tests that JSON and TOML config parsing handles arbitrary input without
//! panicking, and that anything accepted survives validation checks.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tunnel_config::{validate_engine_config, EngineConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for parsed in [EngineConfig::from_json_str(text), EngineConfig::from_toml_str(text)] {
        if let Ok(config) = parsed {
            if validate_engine_config(&config).is_ok() {
                assert!(config.thresholds.moderate_min < config.thresholds.poor_min);
                assert!(config.min_samples >= 1);
                let _ = config.to_canonical_json();
            }
        }
    }
});
