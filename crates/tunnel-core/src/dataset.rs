//! Pitch datasets.
//!
//! A [`PitchDataset`] is the read-only snapshot the engine works against:
//! loaded once, validated once, and shared by cheap clone. Records are read
//! leniently and then converted into [`Pitch`]es, so a bad export fails with
//! the index and field of the first offending record.
//!
//! [`DatasetLoader`] tracks the single fetch-then-ready transition a host goes
//! through. There are no retries; a failed load stays failed until the caller
//! starts a new one.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::Serialize;
use tunnel_common::{Error, Pitch, RawPitch, Result};

use crate::logging::event_names;

/// Team bucket for pitchers whose records carry no team code.
pub const UNKNOWN_TEAM: &str = "UNK";

/// Immutable, shareable collection of validated pitches.
#[derive(Debug, Clone, Default)]
pub struct PitchDataset {
    pitches: Arc<[Pitch]>,
}

/// Pitchers belonging to one team code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TeamRoster {
    pub team: String,
    pub pitchers: Vec<String>,
}

impl PitchDataset {
    /// Build a dataset from already-constructed pitches, validating each.
    pub fn from_pitches(pitches: Vec<Pitch>) -> Result<Self> {
        for (index, pitch) in pitches.iter().enumerate() {
            pitch.validate(index)?;
        }
        Ok(PitchDataset {
            pitches: pitches.into(),
        })
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pitch> {
        self.pitches.iter()
    }

    /// Whether any record belongs to `name`.
    pub fn has_pitcher(&self, name: &str) -> bool {
        self.pitches.iter().any(|p| p.pitcher_name == name)
    }

    /// Unique pitcher names, sorted.
    pub fn pitchers(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .pitches
            .iter()
            .map(|p| p.pitcher_name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Pitchers grouped by team code; teams and pitchers sorted.
    pub fn roster(&self) -> Vec<TeamRoster> {
        let mut teams: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for pitch in self.pitches.iter() {
            let team = pitch
                .pitcher_team_code
                .as_deref()
                .filter(|code| !code.trim().is_empty())
                .unwrap_or(UNKNOWN_TEAM);
            teams
                .entry(team)
                .or_default()
                .push(pitch.pitcher_name.clone());
        }

        teams
            .into_iter()
            .map(|(team, mut pitchers)| {
                pitchers.sort();
                pitchers.dedup();
                TeamRoster {
                    team: team.to_string(),
                    pitchers,
                }
            })
            .collect()
    }

    /// Pitch type codes thrown by `pitcher`, sorted.
    pub fn pitch_types_for(&self, pitcher: &str) -> Vec<String> {
        let mut types: Vec<String> = self
            .pitches
            .iter()
            .filter(|p| p.pitcher_name == pitcher)
            .map(|p| p.pitch_type.clone())
            .collect();
        types.sort();
        types.dedup();
        types
    }
}

impl<'a> IntoIterator for &'a PitchDataset {
    type Item = &'a Pitch;
    type IntoIter = std::slice::Iter<'a, Pitch>;

    fn into_iter(self) -> Self::IntoIter {
        self.pitches.iter()
    }
}

/// Parse a JSON array of pitch records.
pub fn parse_dataset<R: Read>(reader: R) -> Result<PitchDataset> {
    let raw: Vec<RawPitch> = serde_json::from_reader(reader)
        .map_err(|e| Error::DatasetLoad(format!("invalid dataset JSON: {}", e)))?;

    let pitches = raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_pitch(index))
        .collect::<Result<Vec<_>>>()?;

    Ok(PitchDataset {
        pitches: pitches.into(),
    })
}

/// Parse a dataset from an in-memory JSON string.
pub fn parse_dataset_str(json: &str) -> Result<PitchDataset> {
    parse_dataset(json.as_bytes())
}

/// Load a dataset file.
pub fn load_dataset(path: &Path) -> Result<PitchDataset> {
    let file = File::open(path)
        .map_err(|e| Error::DatasetLoad(format!("cannot open {}: {}", path.display(), e)))?;
    parse_dataset(BufReader::new(file))
}

/// Where a dataset load currently stands.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Ready(PitchDataset),
    Failed(String),
}

impl LoadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::NotLoaded => "not_loaded",
            LoadState::Loading => "loading",
            LoadState::Ready(_) => "ready",
            LoadState::Failed(_) => "failed",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drives one dataset through `NotLoaded → Loading → Ready | Failed`.
#[derive(Debug, Default)]
pub struct DatasetLoader {
    state: LoadState,
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Mark a load as in flight. Any previous dataset or failure is dropped.
    pub fn begin(&mut self) {
        tracing::debug!(target: event_names::DATASET_LOAD_STARTED, "dataset load started");
        self.state = LoadState::Loading;
    }

    /// Settle an in-flight load with the loader's outcome.
    ///
    /// Returns the dataset on success; on failure the error is recorded in
    /// [`LoadState::Failed`] and returned unchanged.
    pub fn complete(&mut self, outcome: Result<PitchDataset>) -> Result<PitchDataset> {
        match outcome {
            Ok(dataset) => {
                tracing::debug!(
                    target: event_names::DATASET_LOADED,
                    pitches = dataset.len(),
                    "dataset ready"
                );
                self.state = LoadState::Ready(dataset.clone());
                Ok(dataset)
            }
            Err(err) => {
                tracing::warn!(
                    target: event_names::DATASET_LOAD_FAILED,
                    code = err.code(),
                    "dataset load failed: {}",
                    err
                );
                self.state = LoadState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// `begin` + `load_dataset` + `complete` in one call.
    pub fn load_path(&mut self, path: &Path) -> Result<PitchDataset> {
        self.begin();
        self.complete(load_dataset(path))
    }

    /// The dataset, if ready.
    pub fn dataset(&self) -> Result<&PitchDataset> {
        match &self.state {
            LoadState::Ready(dataset) => Ok(dataset),
            other => Err(Error::DatasetNotReady {
                state: other.to_string(),
            }),
        }
    }
}
