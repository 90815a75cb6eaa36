//! Analysis sessions.
//!
//! An [`AnalysisSession`] binds the projector, aggregator and comparator to
//! a live [`Selection`] over an immutable dataset. State is explicit: every
//! selection mutation clears stale results, and under
//! [`RecomputePolicy::Explicit`] the caller re-runs analysis when it wants
//! fresh ones. [`RecomputePolicy::OnChange`] re-runs immediately instead.
//!
//! ```ignore
//! let mut session = AnalysisSession::new(dataset, EngineConfig::default());
//! session.select_pitcher("Ahn")?;
//! session.set_stance(StanceFilter::Windup)?;
//! for r in session.run_analysis()? {
//!     println!("{} vs {}: {}", r.pitch_type_a, r.pitch_type_b, r.label());
//! }
//! ```

use schemars::JsonSchema;
use serde::Serialize;
use tunnel_common::{
    AnalysisStatus, Error, Pitch, PitchTypeSummary, Result, Selection, StanceFilter,
    TrajectoryPoint, TunnelAnalysisResult,
};
use tunnel_config::{EngineConfig, RecomputePolicy};

use crate::aggregate::{eligible_pitch_types, summarize};
use crate::compare::compare;
use crate::dataset::PitchDataset;
use crate::logging::event_names;
use crate::trajectory::{flight_path, PathSampling};

/// Average flight paths of the selected pitch pair.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct PairPaths {
    pub pitch_type_a: String,
    pub pitch_type_b: String,
    pub decision_time_s: f64,
    pub path_a: Vec<TrajectoryPoint>,
    pub path_b: Vec<TrajectoryPoint>,
}

/// Live analysis over one dataset.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    dataset: PitchDataset,
    config: EngineConfig,
    selection: Selection,
    pitch_pair: Option<(String, String)>,
    summaries: Vec<PitchTypeSummary>,
    results: Vec<TunnelAnalysisResult>,
    status: AnalysisStatus,
}

impl AnalysisSession {
    /// Start a session with nothing selected. The decision time defaults to
    /// `config.decision_time_s`.
    pub fn new(dataset: PitchDataset, config: EngineConfig) -> Self {
        let selection = Selection::default().with_decision_time(config.decision_time_s);
        AnalysisSession {
            dataset,
            config,
            selection,
            pitch_pair: None,
            summaries: Vec::new(),
            results: Vec::new(),
            status: AnalysisStatus::NotRun,
        }
    }

    pub fn dataset(&self) -> &PitchDataset {
        &self.dataset
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn status(&self) -> &AnalysisStatus {
        &self.status
    }

    /// Results of the most recent run; empty after any selection change.
    pub fn results(&self) -> &[TunnelAnalysisResult] {
        &self.results
    }

    /// Summaries backing the most recent results.
    pub fn summaries(&self) -> &[PitchTypeSummary] {
        &self.summaries
    }

    /// Select a pitcher. Resets the stance filter and pitch pair and clears
    /// any previous results.
    pub fn select_pitcher(&mut self, name: &str) -> Result<()> {
        if !self.dataset.has_pitcher(name) {
            return Err(Error::UnknownPitcher {
                name: name.to_string(),
            });
        }
        tracing::debug!(target: event_names::SELECTION_CHANGED, pitcher = name, "pitcher selected");
        self.selection.pitcher = Some(name.to_string());
        self.selection.stance = StanceFilter::Both;
        self.pitch_pair = None;
        self.after_change()
    }

    /// Drop the pitcher selection entirely.
    pub fn clear_pitcher(&mut self) -> Result<()> {
        self.selection.pitcher = None;
        self.selection.stance = StanceFilter::Both;
        self.pitch_pair = None;
        self.after_change()
    }

    pub fn set_stance(&mut self, stance: StanceFilter) -> Result<()> {
        self.selection.stance = stance;
        self.after_change()
    }

    pub fn set_decision_time(&mut self, seconds: f64) -> Result<()> {
        check_decision_time(seconds)?;
        self.selection.decision_time_s = seconds;
        self.after_change()
    }

    /// Selected pitcher's pitches that pass the stance filter.
    pub fn filtered_pitches(&self) -> Vec<&Pitch> {
        self.dataset
            .iter()
            .filter(|p| self.selection.matches(p))
            .collect()
    }

    /// Pitch types in the filtered view with at least `min_samples` pitches.
    pub fn eligible_pitch_types(&self) -> Vec<String> {
        eligible_pitch_types(self.filtered_pitches(), self.config.min_samples)
    }

    /// Run analysis at the current decision time.
    ///
    /// With no pitcher selected or fewer than two eligible pitch types the
    /// result list is empty and [`status`](Self::status) says why.
    pub fn run_analysis(&mut self) -> Result<&[TunnelAnalysisResult]> {
        self.invalidate();

        if self.selection.pitcher.is_none() {
            self.status = AnalysisStatus::NoPitcherSelected;
            return Ok(&self.results);
        }

        let t = self.selection.decision_time_s;
        let filtered = self.filtered_pitches();
        let eligible = eligible_pitch_types(filtered.iter().copied(), self.config.min_samples);
        tracing::debug!(
            target: event_names::ANALYSIS_STARTED,
            pitches = filtered.len(),
            eligible = eligible.len(),
            decision_time_s = t,
            "analysis started"
        );

        if eligible.len() < 2 {
            tracing::info!(
                target: event_names::ANALYSIS_INSUFFICIENT_DATA,
                eligible = eligible.len(),
                "need at least two pitch types with {} or more samples",
                self.config.min_samples
            );
            self.status = AnalysisStatus::InsufficientData { eligible };
            return Ok(&self.results);
        }

        let summaries = summarize(filtered, t, self.config.min_samples)?;
        let results = compare(&summaries, &self.config.thresholds);
        tracing::debug!(
            target: event_names::ANALYSIS_FINISHED,
            summaries = summaries.len(),
            pairs = results.len(),
            "analysis finished"
        );

        self.status = AnalysisStatus::Complete {
            pairs: results.len(),
        };
        self.summaries = summaries;
        self.results = results;
        Ok(&self.results)
    }

    /// Set the decision time and run analysis in one step.
    pub fn run_analysis_at(&mut self, seconds: f64) -> Result<&[TunnelAnalysisResult]> {
        check_decision_time(seconds)?;
        self.selection.decision_time_s = seconds;
        self.run_analysis()
    }

    /// Choose two pitch types for side-by-side flight paths. They must
    /// differ and both be eligible under the current selection.
    pub fn select_pitch_pair(&mut self, a: &str, b: &str) -> Result<()> {
        if a == b {
            return Err(Error::SamePitchType {
                pitch_type: a.to_string(),
            });
        }
        let eligible = self.eligible_pitch_types();
        for pitch_type in [a, b] {
            if !eligible.iter().any(|t| t == pitch_type) {
                return Err(Error::IneligiblePitchType {
                    pitch_type: pitch_type.to_string(),
                });
            }
        }
        self.pitch_pair = Some((a.to_string(), b.to_string()));
        Ok(())
    }

    pub fn pitch_pair(&self) -> Option<(&str, &str)> {
        self.pitch_pair
            .as_ref()
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// The current result for the selected pair, if analysis has run.
    pub fn pair_result(&self) -> Option<&TunnelAnalysisResult> {
        let (a, b) = self.pitch_pair()?;
        self.results.iter().find(|r| r.is_pair(a, b))
    }

    /// Flight paths for the selected pair, or `None` when no pair is selected.
    pub fn pair_flight_paths(&self) -> Result<Option<PairPaths>> {
        let Some((a, b)) = self.pitch_pair() else {
            return Ok(None);
        };

        let eligible = self.eligible_pitch_types();
        if let Some(missing) = [a, b].into_iter().find(|t| !eligible.iter().any(|e| e == t)) {
            return Err(Error::IneligiblePitchType {
                pitch_type: missing.to_string(),
            });
        }

        let sampling = PathSampling {
            decision_time_s: self.selection.decision_time_s,
            plate_y_ft: self.config.plate_y_ft,
            step_s: self.config.path_step_s,
        };
        let filtered = self.filtered_pitches();
        Ok(Some(PairPaths {
            pitch_type_a: a.to_string(),
            pitch_type_b: b.to_string(),
            decision_time_s: sampling.decision_time_s,
            path_a: flight_path(filtered.iter().copied(), a, &sampling)?,
            path_b: flight_path(filtered.iter().copied(), b, &sampling)?,
        }))
    }

    fn invalidate(&mut self) {
        self.summaries.clear();
        self.results.clear();
        self.status = AnalysisStatus::NotRun;
    }

    fn after_change(&mut self) -> Result<()> {
        self.invalidate();
        if self.config.recompute == RecomputePolicy::OnChange {
            self.run_analysis()?;
        }
        Ok(())
    }
}

fn check_decision_time(seconds: f64) -> Result<()> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDecisionTime { value: seconds })
    }
}
