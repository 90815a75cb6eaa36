//! JSON Schema generation for output types.
//!
//! Consumers of the JSON output can fetch the schema of any record the
//! engine emits:
//!
//! ```bash
//! # List available schema types
//! tunnel-core schema --list
//!
//! # Generate schema for a specific type
//! tunnel-core schema TunnelAnalysisResult
//!
//! # Generate all schemas
//! tunnel-core schema
//! ```

use schemars::schema_for;
use serde_json::Value;
use std::collections::BTreeMap;

pub use crate::dataset::TeamRoster;
pub use crate::session::PairPaths;
pub use tunnel_common::{
    AnalysisStatus, Pitch, PitchTypeSummary, Selection, Stance, StanceFilter, TrajectoryPoint,
    TunnelAnalysisResult, TunnelClass,
};

/// Available schema types with their descriptions.
pub fn available_schemas() -> Vec<(&'static str, &'static str)> {
    vec![
        // Input records
        ("Pitch", "Single pitch release record"),
        ("Stance", "Delivery stance (windup or stretch)"),
        // Selection
        ("StanceFilter", "Stance filter for a selection"),
        ("Selection", "Pitcher, stance and decision time being analyzed"),
        // Analysis output
        ("PitchTypeSummary", "Average release and decision-point location"),
        ("TunnelClass", "Tunnel quality classification"),
        (
            "TunnelAnalysisResult",
            "Separation and classification for one pitch-type pair",
        ),
        ("AnalysisStatus", "Outcome of the last analysis request"),
        // Flight paths and rosters
        ("TrajectoryPoint", "One sample of an average flight path"),
        ("PairPaths", "Flight paths for a selected pitch-type pair"),
        ("TeamRoster", "Pitchers grouped by team"),
    ]
}

/// Generate JSON Schema for a type by name.
///
/// Returns the schema as a serde_json::Value, or None if the type is unknown.
pub fn generate_schema(type_name: &str) -> Option<Value> {
    let schema = match type_name {
        "Pitch" => schema_for!(Pitch),
        "Stance" => schema_for!(Stance),
        "StanceFilter" => schema_for!(StanceFilter),
        "Selection" => schema_for!(Selection),
        "PitchTypeSummary" => schema_for!(PitchTypeSummary),
        "TunnelClass" => schema_for!(TunnelClass),
        "TunnelAnalysisResult" => schema_for!(TunnelAnalysisResult),
        "AnalysisStatus" => schema_for!(AnalysisStatus),
        "TrajectoryPoint" => schema_for!(TrajectoryPoint),
        "PairPaths" => schema_for!(PairPaths),
        "TeamRoster" => schema_for!(TeamRoster),
        _ => return None,
    };

    serde_json::to_value(schema).ok()
}

/// Generate all schemas as a map from type name to schema.
pub fn generate_all_schemas() -> BTreeMap<String, Value> {
    let mut schemas = BTreeMap::new();
    for (name, _desc) in available_schemas() {
        if let Some(schema) = generate_schema(name) {
            schemas.insert(name.to_string(), schema);
        }
    }
    schemas
}

/// Schema output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

/// Format a schema value for output.
pub fn format_schema(schema: &Value, format: SchemaFormat) -> serde_json::Result<String> {
    match format {
        SchemaFormat::Json => serde_json::to_string_pretty(schema),
        SchemaFormat::JsonCompact => serde_json::to_string(schema),
    }
}
