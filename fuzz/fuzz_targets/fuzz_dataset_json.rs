//! Fuzz target for pitch dataset parsing.
//!
//! Datasets arrive as arbitrary JSON exports; parsing and the analysis that
//! follows must return errors, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tunnel_config::EngineConfig;
use tunnel_core::dataset::parse_dataset;
use tunnel_core::session::AnalysisSession;

fuzz_target!(|data: &[u8]| {
    let Ok(dataset) = parse_dataset(data) else {
        return;
    };

    let pitchers = dataset.pitchers();
    let _ = dataset.roster();

    let config = EngineConfig {
        min_samples: 1,
        ..EngineConfig::default()
    };
    let mut session = AnalysisSession::new(dataset, config);
    for name in pitchers.iter().take(4) {
        if session.select_pitcher(name).is_ok() {
            let _ = session.run_analysis();
        }
    }
});
