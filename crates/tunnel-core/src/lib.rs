//! Pitch Tunnel Core Library
//!
//! This library provides the analysis engine behind the `tunnel-core` CLI:
//! - Dataset loading and validation
//! - Trajectory projection and per-type aggregation
//! - Pairwise tunnel comparison and classification
//! - Analysis sessions with explicit selection state
//! - Reports, schemas, logging and exit codes
//!
//! The binary entry point is in `main.rs`.

pub mod aggregate;
pub mod compare;
pub mod config;
pub mod dataset;
pub mod exit_codes;
pub mod logging;
pub mod projector;
pub mod report;
pub mod schema;
pub mod session;
pub mod trajectory;

#[cfg(test)]
mod test_support;

pub use dataset::{load_dataset, parse_dataset_str, DatasetLoader, LoadState, PitchDataset};
pub use exit_codes::ExitCode;
pub use report::AnalysisReport;
pub use session::{AnalysisSession, PairPaths};
