//! Fuzz target for analysis session state transitions.
//!
//! Drives a session through arbitrary sequences of selection changes and
//! analysis requests over a fixed dataset. Results must always agree with
//! the reported status.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tunnel_common::{AnalysisStatus, Pitch, StanceFilter};
use tunnel_config::{EngineConfig, RecomputePolicy};
use tunnel_core::dataset::PitchDataset;
use tunnel_core::session::AnalysisSession;

const PITCHERS: [&str; 3] = ["Ahn", "Kim", "Ghost"];
const TYPES: [&str; 3] = ["FF", "SL", "CU"];

#[derive(Debug, Arbitrary)]
enum Op {
    Select(u8),
    Clear,
    Stance(u8),
    Time(f64),
    Run,
    Pair(u8, u8),
    Paths,
}

#[derive(Debug, Arbitrary)]
struct Input {
    on_change: bool,
    min_samples: u8,
    ops: Vec<Op>,
}

fn dataset() -> PitchDataset {
    let mut pitches = Vec::new();
    for (pi, pitcher) in PITCHERS[..2].iter().enumerate() {
        for (ti, ty) in TYPES.iter().enumerate() {
            for i in 0..(4 + 3 * ti + pi) {
                pitches.push(Pitch {
                    pitch_id: None,
                    pitcher_id: None,
                    pitcher_name: pitcher.to_string(),
                    pitcher_team_code: None,
                    pitch_type: ty.to_string(),
                    is_throwing_stretch: i % 2 == 0,
                    x0: -1.8,
                    z0: 5.9,
                    y0: 50.0,
                    vx0: 3.0 + ti as f64,
                    vy0: -130.0,
                    vz0: -5.0,
                    ax: -5.0 * ti as f64,
                    ay: 28.0,
                    az: -15.0,
                });
            }
        }
    }
    match PitchDataset::from_pitches(pitches) {
        Ok(ds) => ds,
        Err(e) => panic!("fixed dataset must validate: {e}"),
    }
}

fuzz_target!(|input: Input| {
    let config = EngineConfig {
        min_samples: usize::from(input.min_samples.max(1)),
        recompute: if input.on_change {
            RecomputePolicy::OnChange
        } else {
            RecomputePolicy::Explicit
        },
        ..EngineConfig::default()
    };
    let mut session = AnalysisSession::new(dataset(), config);

    for op in input.ops.into_iter().take(64) {
        let _ = match op {
            Op::Select(i) => session.select_pitcher(PITCHERS[usize::from(i) % PITCHERS.len()]),
            Op::Clear => session.clear_pitcher(),
            Op::Stance(i) => session.set_stance(match i % 3 {
                0 => StanceFilter::Windup,
                1 => StanceFilter::Stretch,
                _ => StanceFilter::Both,
            }),
            Op::Time(t) => session.set_decision_time(t),
            Op::Run => session.run_analysis().map(|_| ()),
            Op::Pair(a, b) => session.select_pitch_pair(
                TYPES[usize::from(a) % TYPES.len()],
                TYPES[usize::from(b) % TYPES.len()],
            ),
            Op::Paths => session.pair_flight_paths().map(|_| ()),
        };

        match session.status() {
            AnalysisStatus::Complete { pairs } => assert_eq!(*pairs, session.results().len()),
            _ => assert!(session.results().is_empty()),
        }
    }
});
