//! No-mock tests for pitch record parsing against a realistic export.
//!
//! Covers:
//! - Lenient wire parsing followed by strict validation
//! - First malformed record is reported by position
//! - Output records serialize with stable field names

use tunnel_common::{
    Error, Pitch, PitchTypeSummary, RawPitch, TunnelAnalysisResult, TunnelClass,
};

const EXPORT: &str = r#"[
  {"pitch_id": 1, "pitcher_id": 55, "pitcher_name": "Ahn", "pitcher_team_code": "LG",
   "pitch_type": "FF", "is_throwing_stretch": false,
   "x0": -1.82, "z0": 5.95, "y0": 50.0, "vx0": 5.6, "vy0": -133.2, "vz0": -4.9,
   "ax": -10.1, "ay": 27.9, "az": -13.2},
  {"pitch_id": 2, "pitcher_name": "Ahn",
   "pitch_type": "SL", "is_throwing_stretch": true,
   "x0": -1.90, "z0": 5.88, "y0": 50.0, "vx0": 2.1, "vy0": -122.0, "vz0": -2.2,
   "ax": 3.4, "ay": 24.0, "az": -28.8},
  {"pitch_id": 3, "pitcher_name": "Ahn",
   "pitch_type": "CU", "is_throwing_stretch": true,
   "x0": -1.95, "z0": 6.02, "y0": 50.0, "vx0": 1.0, "vy0": -112.0, "vvz0": 1.5,
   "ax": 5.0, "ay": 21.0, "az": -41.0}
]"#;

fn parse(json: &str) -> Vec<Result<Pitch, Error>> {
    let raws: Vec<RawPitch> = serde_json::from_str(json).expect("export is a JSON array");
    raws.into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_pitch(i))
        .collect()
}

#[test]
fn valid_records_convert() {
    let parsed = parse(EXPORT);
    assert!(parsed[0].is_ok());
    assert!(parsed[1].is_ok());
    let first = parsed[0].as_ref().unwrap();
    assert_eq!(first.pitcher_team_code.as_deref(), Some("LG"));
}

#[test]
fn misspelled_field_is_reported_as_missing() {
    let parsed = parse(EXPORT);
    match &parsed[2] {
        Err(Error::MalformedPitch {
            index,
            pitch_id,
            field,
            reason,
        }) => {
            assert_eq!(*index, 2);
            assert_eq!(*pitch_id, Some(3));
            assert_eq!(field, "vz0");
            assert_eq!(reason, "is missing");
        }
        other => panic!("expected malformed pitch, got {other:?}"),
    }
}

#[test]
fn output_records_serialize_with_stable_names() {
    let summary = PitchTypeSummary {
        pitch_type: "FF".into(),
        count: 12,
        avg_x0: 0.0,
        avg_z0: 6.0,
        avg_proj_x: 0.0,
        avg_proj_z: 5.0,
    };
    let value = serde_json::to_value(&summary).unwrap();
    for key in ["pitch_type", "count", "avg_x0", "avg_z0", "avg_proj_x", "avg_proj_z"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }

    let result = TunnelAnalysisResult {
        pitch_type_a: "FF".into(),
        pitch_type_b: "CU".into(),
        release_separation: 0.0,
        tunnel_separation: 0.3606,
        classification: TunnelClass::PoorTunnel,
    };
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["classification"], "poor_tunnel");
    assert_eq!(value["pitch_type_a"], "FF");
}
