//! Derived analysis records.
//!
//! These are plain data: no behavior beyond a few accessors, and every type
//! serializes directly for a presentation layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tunnel_math::PlanePoint;

/// Average flight of one pitch type for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PitchTypeSummary {
    pub pitch_type: String,
    pub count: usize,
    /// Average release point.
    pub avg_x0: f64,
    pub avg_z0: f64,
    /// Average projected point at the decision time.
    pub avg_proj_x: f64,
    pub avg_proj_z: f64,
}

impl PitchTypeSummary {
    pub fn release_point(&self) -> PlanePoint {
        PlanePoint::new(self.avg_x0, self.avg_z0)
    }

    pub fn projected_point(&self) -> PlanePoint {
        PlanePoint::new(self.avg_proj_x, self.avg_proj_z)
    }
}

/// How well two pitch types hide from each other at the decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TunnelClass {
    /// Separation below the moderate threshold.
    GoodTunnel,
    /// Separation between the two thresholds.
    ModerateSeparation,
    /// Separation at or above the poor threshold.
    PoorTunnel,
}

impl TunnelClass {
    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            TunnelClass::GoodTunnel => "Good Tunneling",
            TunnelClass::ModerateSeparation => "Moderate Separation",
            TunnelClass::PoorTunnel => "HIGH Disruption (Poor Tunnel)",
        }
    }
}

impl std::fmt::Display for TunnelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparison of one unordered pair of pitch types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TunnelAnalysisResult {
    /// The type encountered first in the summary list.
    pub pitch_type_a: String,
    pub pitch_type_b: String,
    /// Distance between average release points (ft).
    pub release_separation: f64,
    /// Distance between average projected points at the decision time (ft).
    pub tunnel_separation: f64,
    pub classification: TunnelClass,
}

impl TunnelAnalysisResult {
    pub fn label(&self) -> &'static str {
        self.classification.label()
    }

    /// Whether this result concerns the given pair, in either order.
    pub fn is_pair(&self, a: &str, b: &str) -> bool {
        (self.pitch_type_a == a && self.pitch_type_b == b)
            || (self.pitch_type_a == b && self.pitch_type_b == a)
    }
}

/// Outcome of the most recent analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// Nothing has been run since the last selection change.
    NotRun,
    /// No pitcher is selected.
    NoPitcherSelected,
    /// Fewer than two pitch types meet the sample threshold.
    InsufficientData { eligible: Vec<String> },
    /// Analysis ran and produced one result per pair.
    Complete { pairs: usize },
}

impl AnalysisStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, AnalysisStatus::Complete { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::NotRun => "not_run",
            AnalysisStatus::NoPitcherSelected => "no_pitcher_selected",
            AnalysisStatus::InsufficientData { .. } => "insufficient_data",
            AnalysisStatus::Complete { .. } => "complete",
        }
    }
}

/// One sample of a pitch type's average flight path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrajectoryPoint {
    pub pitch_type: String,
    /// Seconds after release.
    pub t: f64,
    pub x: f64,
    pub z: f64,
    /// `true` once the sample is beyond the decision time.
    pub past_decision_point: bool,
}
