//! Pitch release telemetry records.
//!
//! A [`Pitch`] is the release state of a single pitch: where the ball left
//! the hand, how fast it was moving, and how it was accelerating. Positions
//! are in feet, velocities in ft/s, accelerations in ft/s² (catcher's view:
//! +x toward the first-base side, y toward the pitcher, z up).
//!
//! Exported datasets are read through [`RawPitch`], which accepts records with
//! missing fields so that validation can name the exact record and field that
//! is wrong instead of failing the whole parse with a serde message.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Delivery mode a pitch was thrown from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Windup,
    Stretch,
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stance::Windup => write!(f, "windup"),
            Stance::Stretch => write!(f, "stretch"),
        }
    }
}

/// A single pitch's release state. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pitch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitcher_id: Option<u64>,
    pub pitcher_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitcher_team_code: Option<String>,
    /// Pitch type code, e.g. `FF`, `CU`, `SL`.
    pub pitch_type: String,
    /// `true` for the stretch, `false` for the windup.
    pub is_throwing_stretch: bool,

    pub x0: f64,
    pub z0: f64,
    pub y0: f64,

    pub vx0: f64,
    pub vy0: f64,
    pub vz0: f64,

    pub ax: f64,
    pub ay: f64,
    pub az: f64,
}

impl Pitch {
    pub fn stance(&self) -> Stance {
        if self.is_throwing_stretch {
            Stance::Stretch
        } else {
            Stance::Windup
        }
    }

    /// Kinematic fields by name, in release-state order.
    pub fn kinematic_fields(&self) -> [(&'static str, f64); 9] {
        [
            ("x0", self.x0),
            ("z0", self.z0),
            ("y0", self.y0),
            ("vx0", self.vx0),
            ("vy0", self.vy0),
            ("vz0", self.vz0),
            ("ax", self.ax),
            ("ay", self.ay),
            ("az", self.az),
        ]
    }

    /// Reject records whose kinematics would poison an average.
    ///
    /// `index` is the record's position in its dataset and is only used to
    /// identify the record in the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        for (field, value) in self.kinematic_fields() {
            if !value.is_finite() {
                return Err(Error::MalformedPitch {
                    index,
                    pitch_id: self.pitch_id,
                    field: field.to_string(),
                    reason: format!("is not finite ({})", value),
                });
            }
        }
        if self.pitch_type.trim().is_empty() {
            return Err(Error::MalformedPitch {
                index,
                pitch_id: self.pitch_id,
                field: "pitch_type".to_string(),
                reason: "is empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Lenient wire form of a pitch record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPitch {
    #[serde(default)]
    pub pitch_id: Option<u64>,
    #[serde(default)]
    pub pitcher_id: Option<u64>,
    #[serde(default)]
    pub pitcher_name: Option<String>,
    #[serde(default)]
    pub pitcher_team_code: Option<String>,
    #[serde(default)]
    pub pitch_type: Option<String>,
    #[serde(default)]
    pub is_throwing_stretch: Option<bool>,

    #[serde(default)]
    pub x0: Option<f64>,
    #[serde(default)]
    pub z0: Option<f64>,
    #[serde(default)]
    pub y0: Option<f64>,
    #[serde(default)]
    pub vx0: Option<f64>,
    #[serde(default)]
    pub vy0: Option<f64>,
    #[serde(default)]
    pub vz0: Option<f64>,
    #[serde(default)]
    pub ax: Option<f64>,
    #[serde(default)]
    pub ay: Option<f64>,
    #[serde(default)]
    pub az: Option<f64>,
}

impl RawPitch {
    /// Convert into a validated [`Pitch`], failing on the first missing or
    /// non-finite required field.
    pub fn into_pitch(self, index: usize) -> Result<Pitch> {
        let pitch_id = self.pitch_id;
        let missing = |field: &str| Error::MalformedPitch {
            index,
            pitch_id,
            field: field.to_string(),
            reason: "is missing".to_string(),
        };

        let pitch = Pitch {
            pitch_id,
            pitcher_id: self.pitcher_id,
            pitcher_name: self.pitcher_name.ok_or_else(|| missing("pitcher_name"))?,
            pitcher_team_code: self.pitcher_team_code,
            pitch_type: self.pitch_type.ok_or_else(|| missing("pitch_type"))?,
            is_throwing_stretch: self
                .is_throwing_stretch
                .ok_or_else(|| missing("is_throwing_stretch"))?,
            x0: self.x0.ok_or_else(|| missing("x0"))?,
            z0: self.z0.ok_or_else(|| missing("z0"))?,
            y0: self.y0.ok_or_else(|| missing("y0"))?,
            vx0: self.vx0.ok_or_else(|| missing("vx0"))?,
            vy0: self.vy0.ok_or_else(|| missing("vy0"))?,
            vz0: self.vz0.ok_or_else(|| missing("vz0"))?,
            ax: self.ax.ok_or_else(|| missing("ax"))?,
            ay: self.ay.ok_or_else(|| missing("ay"))?,
            az: self.az.ok_or_else(|| missing("az"))?,
        };
        pitch.validate(index)?;
        Ok(pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_fastball() -> RawPitch {
        RawPitch {
            pitch_id: Some(7),
            pitcher_id: Some(1001),
            pitcher_name: Some("Ahn".into()),
            pitcher_team_code: Some("LG".into()),
            pitch_type: Some("FF".into()),
            is_throwing_stretch: Some(false),
            x0: Some(-1.8),
            z0: Some(5.9),
            y0: Some(50.0),
            vx0: Some(5.1),
            vy0: Some(-132.0),
            vz0: Some(-4.4),
            ax: Some(-9.0),
            ay: Some(28.5),
            az: Some(-14.0),
        }
    }

    #[test]
    fn raw_converts_when_complete() {
        let pitch = raw_fastball().into_pitch(0).expect("valid pitch");
        assert_eq!(pitch.pitch_type, "FF");
        assert_eq!(pitch.stance(), Stance::Windup);
        assert_eq!(pitch.vy0, -132.0);
    }

    #[test]
    fn missing_numeric_field_names_record() {
        let mut raw = raw_fastball();
        raw.vz0 = None;
        let err = raw.into_pitch(4).unwrap_err();
        match err {
            Error::MalformedPitch {
                index,
                pitch_id,
                field,
                ..
            } => {
                assert_eq!(index, 4);
                assert_eq!(pitch_id, Some(7));
                assert_eq!(field, "vz0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_optional_identifiers_tolerated() {
        let mut raw = raw_fastball();
        raw.pitch_id = None;
        raw.pitcher_id = None;
        raw.pitcher_team_code = None;
        let pitch = raw.into_pitch(0).expect("identifiers are optional");
        assert!(pitch.pitch_id.is_none());
    }

    #[test]
    fn non_finite_value_rejected() {
        let mut raw = raw_fastball();
        raw.az = Some(f64::NAN);
        let err = raw.into_pitch(0).unwrap_err();
        assert!(err.to_string().contains("`az`"));
    }

    #[test]
    fn empty_pitch_type_rejected() {
        let mut raw = raw_fastball();
        raw.pitch_type = Some("  ".into());
        assert!(raw.into_pitch(0).is_err());
    }

    #[test]
    fn stretch_flag_maps_to_stance() {
        let mut raw = raw_fastball();
        raw.is_throwing_stretch = Some(true);
        assert_eq!(raw.into_pitch(0).unwrap().stance(), Stance::Stretch);
    }

    #[test]
    fn deserializes_export_record() {
        let json = r#"{
            "pitch_id": 12, "pitcher_name": "Ahn", "pitch_type": "CU",
            "is_throwing_stretch": true,
            "x0": -1.7, "z0": 6.0, "y0": 50.0,
            "vx0": 3.0, "vy0": -110.0, "vz0": 2.0,
            "ax": 4.0, "ay": 22.0, "az": -40.0
        }"#;
        let raw: RawPitch = serde_json::from_str(json).unwrap();
        let pitch = raw.into_pitch(0).unwrap();
        assert_eq!(pitch.pitch_type, "CU");
        assert!(pitch.pitcher_team_code.is_none());
    }
}
