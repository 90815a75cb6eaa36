//! Property-based tests for analysis engine invariants.
//!
//! Uses proptest to check classification, comparison and aggregation
//! properties across many random inputs.

use proptest::prelude::*;
use std::collections::HashMap;
use tunnel_common::{Pitch, PitchTypeSummary, TunnelClass};
use tunnel_config::ClassificationThresholds;
use tunnel_core::aggregate::summarize;
use tunnel_core::compare::{classify, compare, compare_pair};
use tunnel_core::projector::project;

const TYPES: [&str; 4] = ["FF", "SL", "CU", "CH"];

fn pitch(pitch_type: &str, x0: f64, z0: f64, vx0: f64, vz0: f64, ax: f64, az: f64) -> Pitch {
    Pitch {
        pitch_id: None,
        pitcher_id: None,
        pitcher_name: "Ahn".to_string(),
        pitcher_team_code: None,
        pitch_type: pitch_type.to_string(),
        is_throwing_stretch: false,
        x0,
        z0,
        y0: 50.0,
        vx0,
        vy0: -130.0,
        vz0,
        ax,
        ay: 28.0,
        az,
    }
}

fn arb_pitch() -> impl Strategy<Value = Pitch> {
    (
        0..TYPES.len(),
        -3.0..3.0f64,
        4.5..7.0f64,
        -10.0..10.0f64,
        -10.0..5.0f64,
        -20.0..20.0f64,
        -40.0..0.0f64,
    )
        .prop_map(|(ty, x0, z0, vx0, vz0, ax, az)| pitch(TYPES[ty], x0, z0, vx0, vz0, ax, az))
}

fn arb_summary(name: &'static str) -> impl Strategy<Value = PitchTypeSummary> {
    (-3.0..3.0f64, 4.0..7.0f64, -3.0..3.0f64, 3.0..7.0f64).prop_map(
        move |(x0, z0, px, pz)| PitchTypeSummary {
            pitch_type: name.to_string(),
            count: 10,
            avg_x0: x0,
            avg_z0: z0,
            avg_proj_x: px,
            avg_proj_z: pz,
        },
    )
}

fn arb_thresholds() -> impl Strategy<Value = ClassificationThresholds> {
    (0.0..1.0f64, 0.001..1.0f64).prop_map(|(moderate, gap)| ClassificationThresholds {
        moderate_min: moderate,
        poor_min: moderate + gap,
    })
}

fn by_type(summaries: &[PitchTypeSummary]) -> HashMap<String, PitchTypeSummary> {
    summaries
        .iter()
        .map(|s| (s.pitch_type.clone(), s.clone()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Exactly one class applies, and it matches the threshold interval.
    #[test]
    fn classification_matches_intervals(sep in 0.0..3.0f64, t in arb_thresholds()) {
        let class = classify(sep, &t);
        let expected = if sep < t.moderate_min {
            TunnelClass::GoodTunnel
        } else if sep < t.poor_min {
            TunnelClass::ModerateSeparation
        } else {
            TunnelClass::PoorTunnel
        };
        prop_assert_eq!(class, expected);
    }

    /// Classification never improves as separation grows.
    #[test]
    fn classification_is_monotonic(a in 0.0..3.0f64, b in 0.0..3.0f64, t in arb_thresholds()) {
        let rank = |c: TunnelClass| match c {
            TunnelClass::GoodTunnel => 0,
            TunnelClass::ModerateSeparation => 1,
            TunnelClass::PoorTunnel => 2,
        };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(classify(lo, &t)) <= rank(classify(hi, &t)));
    }

    /// Distances do not depend on the order of the pair.
    #[test]
    fn pair_comparison_is_symmetric(a in arb_summary("FF"), b in arb_summary("CU")) {
        let t = ClassificationThresholds::default();
        let ab = compare_pair(&a, &b, &t);
        let ba = compare_pair(&b, &a, &t);
        prop_assert_eq!(ab.release_separation, ba.release_separation);
        prop_assert_eq!(ab.tunnel_separation, ba.tunnel_separation);
        prop_assert_eq!(ab.classification, ba.classification);
        prop_assert!(ab.tunnel_separation >= 0.0);
    }

    /// k summaries produce k(k-1)/2 results, each pair once, `a` before `b`.
    #[test]
    fn compare_covers_each_pair_once(
        s in prop::collection::vec(arb_summary("XX"), 0..8),
    ) {
        let summaries: Vec<PitchTypeSummary> = s
            .into_iter()
            .enumerate()
            .map(|(i, mut s)| {
                s.pitch_type = format!("T{}", i);
                s
            })
            .collect();
        let results = compare(&summaries, &ClassificationThresholds::default());
        let k = summaries.len();
        prop_assert_eq!(results.len(), k * k.saturating_sub(1) / 2);

        let position = |name: &str| summaries.iter().position(|s| s.pitch_type == name);
        for r in &results {
            prop_assert!(position(&r.pitch_type_a) < position(&r.pitch_type_b));
        }
    }

    /// Projection at t = 0 is the release point.
    #[test]
    fn projection_at_release(p in arb_pitch()) {
        let at_release = project(&p, 0.0);
        prop_assert_eq!(at_release.x, p.x0);
        prop_assert_eq!(at_release.z, p.z0);
    }

    /// Per-type means are identical for any ordering of the input.
    #[test]
    fn summaries_are_permutation_invariant(
        (original, shuffled) in prop::collection::vec(arb_pitch(), 1..60)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        t in 0.0..0.4f64,
    ) {
        let a = summarize(&original, t, 1).unwrap();
        let b = summarize(&shuffled, t, 1).unwrap();
        prop_assert_eq!(a.len(), b.len());
        prop_assert_eq!(by_type(&a), by_type(&b));
    }

    /// Raising the sample threshold only removes types.
    #[test]
    fn min_samples_filters_monotonically(
        pitches in prop::collection::vec(arb_pitch(), 0..60),
        lo in 1usize..10,
        extra in 0usize..10,
    ) {
        let loose = summarize(&pitches, 0.15, lo).unwrap();
        let strict = summarize(&pitches, 0.15, lo + extra).unwrap();
        prop_assert!(strict.len() <= loose.len());
        for s in &strict {
            prop_assert!(s.count >= lo + extra);
            prop_assert!(loose.iter().any(|l| l.pitch_type == s.pitch_type));
        }
    }
}
