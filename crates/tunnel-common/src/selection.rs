//! Caller-owned selection state.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pitch::{Pitch, Stance};
use crate::DEFAULT_DECISION_TIME_S;

/// Which deliveries to include in an analysis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum StanceFilter {
    /// Windup deliveries only.
    Windup,
    /// Stretch deliveries only.
    Stretch,
    /// No stance filtering.
    #[default]
    Both,
}

impl StanceFilter {
    pub fn accepts(&self, stance: Stance) -> bool {
        match self {
            StanceFilter::Windup => stance == Stance::Windup,
            StanceFilter::Stretch => stance == Stance::Stretch,
            StanceFilter::Both => true,
        }
    }

    pub fn matches(&self, pitch: &Pitch) -> bool {
        self.accepts(pitch.stance())
    }
}

impl std::fmt::Display for StanceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StanceFilter::Windup => write!(f, "windup"),
            StanceFilter::Stretch => write!(f, "stretch"),
            StanceFilter::Both => write!(f, "both"),
        }
    }
}

/// What the caller is currently looking at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Selection {
    /// Selected pitcher name; `None` until the caller picks one.
    #[serde(default)]
    pub pitcher: Option<String>,
    #[serde(default)]
    pub stance: StanceFilter,
    /// Seconds after release at which pitch types are compared.
    pub decision_time_s: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            pitcher: None,
            stance: StanceFilter::Both,
            decision_time_s: DEFAULT_DECISION_TIME_S,
        }
    }
}

impl Selection {
    pub fn for_pitcher(pitcher: impl Into<String>) -> Self {
        Selection {
            pitcher: Some(pitcher.into()),
            ..Selection::default()
        }
    }

    pub fn with_stance(mut self, stance: StanceFilter) -> Self {
        self.stance = stance;
        self
    }

    pub fn with_decision_time(mut self, seconds: f64) -> Self {
        self.decision_time_s = seconds;
        self
    }

    /// Whether `pitch` belongs to this selection. Nothing matches until a
    /// pitcher is selected.
    pub fn matches(&self, pitch: &Pitch) -> bool {
        match &self.pitcher {
            Some(name) => pitch.pitcher_name == *name && self.stance.matches(pitch),
            None => false,
        }
    }
}
