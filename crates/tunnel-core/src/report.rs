//! Analysis reports.
//!
//! An [`AnalysisReport`] is the serializable envelope around one analysis
//! run: what was selected, what came out, and the config that produced it.
//! It renders as pretty JSON, Markdown tables, or a single summary line.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use tunnel_common::{
    AnalysisStatus, PitchTypeSummary, Result, Selection, TunnelAnalysisResult, SCHEMA_VERSION,
};
use tunnel_config::ConfigSnapshot;

use crate::session::AnalysisSession;

/// Serializable result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub run_id: String,
    pub selection: Selection,
    pub status: AnalysisStatus,
    pub eligible_pitch_types: Vec<String>,
    pub summaries: Vec<PitchTypeSummary>,
    pub results: Vec<TunnelAnalysisResult>,
    pub config: ConfigSnapshot,
}

impl AnalysisReport {
    /// Capture the session's current state.
    pub fn from_session(
        session: &AnalysisSession,
        run_id: impl Into<String>,
        config: ConfigSnapshot,
    ) -> Self {
        AnalysisReport {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            run_id: run_id.into(),
            selection: session.selection().clone(),
            status: session.status().clone(),
            eligible_pitch_types: session.eligible_pitch_types(),
            summaries: session.summaries().to_vec(),
            results: session.results().to_vec(),
            config,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Markdown rendering with a results table and a summary table.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let pitcher = self.selection.pitcher.as_deref().unwrap_or("(none)");

        let _ = writeln!(out, "# Pitch Tunnel Analysis: {}", pitcher);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Stance: {} | Decision time: {:.3}s | Status: {}",
            self.selection.stance,
            self.selection.decision_time_s,
            self.status.as_str()
        );
        let _ = writeln!(out);

        match &self.status {
            AnalysisStatus::Complete { .. } => {}
            AnalysisStatus::InsufficientData { eligible } => {
                let _ = writeln!(
                    out,
                    "Not enough data: need at least two pitch types with {} or more pitches (eligible: {}).",
                    self.config.summary.min_samples,
                    if eligible.is_empty() {
                        "none".to_string()
                    } else {
                        eligible.join(", ")
                    }
                );
                return out;
            }
            AnalysisStatus::NoPitcherSelected | AnalysisStatus::NotRun => {
                let _ = writeln!(out, "No analysis has been run.");
                return out;
            }
        }

        let _ = writeln!(out, "## Pairs");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "| Pitch A | Pitch B | Release sep (ft) | Tunnel sep (ft) | Classification |"
        );
        let _ = writeln!(out, "|---|---|---:|---:|---|");
        for r in &self.results {
            let _ = writeln!(
                out,
                "| {} | {} | {:.3} | {:.3} | {} |",
                r.pitch_type_a,
                r.pitch_type_b,
                r.release_separation,
                r.tunnel_separation,
                r.label()
            );
        }
        let _ = writeln!(out);
        out.push_str(&summaries_markdown(&self.summaries));
        let _ = writeln!(out);
        let _ = writeln!(out, "Run: {} | Config: {}", self.run_id, self.config.short_id());
        out
    }

    /// One-line summary.
    pub fn to_summary_line(&self) -> String {
        let pitcher = self.selection.pitcher.as_deref().unwrap_or("-");
        let head = format!(
            "[{}] {} ({}, t={:.3}s)",
            self.run_id, pitcher, self.selection.stance, self.selection.decision_time_s
        );
        match &self.status {
            AnalysisStatus::Complete { pairs } => {
                let worst = self
                    .results
                    .iter()
                    .max_by(|a, b| a.tunnel_separation.total_cmp(&b.tunnel_separation));
                match worst {
                    Some(r) => format!(
                        "{}: {} pair(s); widest {}/{} {:.3} ft ({})",
                        head,
                        pairs,
                        r.pitch_type_a,
                        r.pitch_type_b,
                        r.tunnel_separation,
                        r.label()
                    ),
                    None => format!("{}: {} pair(s)", head, pairs),
                }
            }
            other => format!("{}: {}", head, other.as_str()),
        }
    }
}

/// Markdown table of per-type summaries.
pub fn summaries_markdown(summaries: &[PitchTypeSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## Pitch types");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "| Type | Count | Release x | Release z | Decision x | Decision z |"
    );
    let _ = writeln!(out, "|---|---:|---:|---:|---:|---:|");
    for s in summaries {
        let _ = writeln!(
            out,
            "| {} | {} | {:.3} | {:.3} | {:.3} | {:.3} |",
            s.pitch_type, s.count, s.avg_x0, s.avg_z0, s.avg_proj_x, s.avg_proj_z
        );
    }
    out
}
