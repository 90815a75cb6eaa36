//! Pairwise tunnel comparison.
//!
//! Each unordered pair of summaries is compared once, in index order
//! (`i < j`). Release separation measures how different the two types look
//! out of the hand; tunnel separation measures how different they look at
//! the decision point, which is what the classification is based on.

use tunnel_common::{PitchTypeSummary, TunnelAnalysisResult, TunnelClass};
use tunnel_config::ClassificationThresholds;

/// Classify a tunnel separation (ft). Lower bounds are inclusive.
pub fn classify(tunnel_separation: f64, thresholds: &ClassificationThresholds) -> TunnelClass {
    if tunnel_separation >= thresholds.poor_min {
        TunnelClass::PoorTunnel
    } else if tunnel_separation >= thresholds.moderate_min {
        TunnelClass::ModerateSeparation
    } else {
        TunnelClass::GoodTunnel
    }
}

/// Compare one pair of summaries.
pub fn compare_pair(
    a: &PitchTypeSummary,
    b: &PitchTypeSummary,
    thresholds: &ClassificationThresholds,
) -> TunnelAnalysisResult {
    let release_separation = a.release_point().distance_to(&b.release_point());
    let tunnel_separation = a.projected_point().distance_to(&b.projected_point());

    TunnelAnalysisResult {
        pitch_type_a: a.pitch_type.clone(),
        pitch_type_b: b.pitch_type.clone(),
        release_separation,
        tunnel_separation,
        classification: classify(tunnel_separation, thresholds),
    }
}

/// Compare every unordered pair of summaries.
///
/// Fewer than two summaries yields an empty list.
pub fn compare(
    summaries: &[PitchTypeSummary],
    thresholds: &ClassificationThresholds,
) -> Vec<TunnelAnalysisResult> {
    let n = summaries.len();
    let mut results = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, a) in summaries.iter().enumerate() {
        for b in &summaries[i + 1..] {
            results.push(compare_pair(a, b, thresholds));
        }
    }
    results
}
