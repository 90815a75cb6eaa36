//! Pitch-type aggregation.
//!
//! Groups a filtered pitch collection by pitch type and averages the release
//! point and the projected point at the decision time. Groups with fewer
//! than `min_samples` members are dropped before anything downstream sees
//! them.
//!
//! Groups come out in first-seen order. The averages themselves do not
//! depend on input order (see [`tunnel_math::MeanAccumulator`]).

use std::collections::HashMap;

use tunnel_common::{Error, Pitch, PitchTypeSummary, Result};
use tunnel_math::MeanAccumulator;

use crate::projector::project;

/// Per-type sample collector.
#[derive(Debug, Default)]
struct TypeGroup {
    x0: MeanAccumulator,
    z0: MeanAccumulator,
    proj_x: MeanAccumulator,
    proj_z: MeanAccumulator,
}

impl TypeGroup {
    fn count(&self) -> usize {
        self.x0.count()
    }
}

/// Average each pitch type's flight at `t` seconds after release.
///
/// Every pitch is validated first; a record with non-finite kinematics fails
/// the whole call with [`Error::MalformedPitch`] identifying its position in
/// `pitches`.
pub fn summarize<'a, I>(pitches: I, t: f64, min_samples: usize) -> Result<Vec<PitchTypeSummary>>
where
    I: IntoIterator<Item = &'a Pitch>,
{
    if !t.is_finite() {
        return Err(Error::InvalidDecisionTime { value: t });
    }

    let mut order: Vec<&'a str> = Vec::new();
    let mut groups: HashMap<&'a str, TypeGroup> = HashMap::new();

    for (index, pitch) in pitches.into_iter().enumerate() {
        pitch.validate(index)?;

        let group = groups.entry(pitch.pitch_type.as_str()).or_insert_with(|| {
            order.push(pitch.pitch_type.as_str());
            TypeGroup::default()
        });

        let projected = project(pitch, t);
        group.x0.push(pitch.x0);
        group.z0.push(pitch.z0);
        group.proj_x.push(projected.x);
        group.proj_z.push(projected.z);
    }

    let summaries = order
        .into_iter()
        .filter_map(|pitch_type| {
            let group = groups.get(pitch_type)?;
            (group.count() >= min_samples).then(|| PitchTypeSummary {
                pitch_type: pitch_type.to_string(),
                count: group.count(),
                avg_x0: group.x0.mean(),
                avg_z0: group.z0.mean(),
                avg_proj_x: group.proj_x.mean(),
                avg_proj_z: group.proj_z.mean(),
            })
        })
        .collect();

    Ok(summaries)
}

/// Number of pitches per type, in first-seen order.
pub fn count_by_type<'a, I>(pitches: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Pitch>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for pitch in pitches {
        match index.get(pitch.pitch_type.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(pitch.pitch_type.as_str(), counts.len());
                counts.push((pitch.pitch_type.clone(), 1));
            }
        }
    }
    counts
}

/// Pitch types with at least `min_samples` occurrences, in first-seen order.
///
/// Independent of the decision time: this gates whether analysis can run at
/// all.
pub fn eligible_pitch_types<'a, I>(pitches: I, min_samples: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a Pitch>,
{
    count_by_type(pitches)
        .into_iter()
        .filter(|(_, count)| *count >= min_samples)
        .map(|(pitch_type, _)| pitch_type)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{pitch_of_type, pitches_of_type};

    #[test]
    fn nine_excluded_ten_included() {
        let mut pitches = pitches_of_type("SL", 9);
        pitches.extend(pitches_of_type("FF", 10));

        let summaries = summarize(&pitches, 0.15, 10).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].pitch_type, "FF");
        assert_eq!(summaries[0].count, 10);
    }

    #[test]
    fn groups_in_first_seen_order() {
        let mut pitches = pitches_of_type("CU", 10);
        pitches.extend(pitches_of_type("FF", 10));
        pitches.push(pitch_of_type("CU"));

        let summaries = summarize(&pitches, 0.15, 10).unwrap();
        let types: Vec<_> = summaries.iter().map(|s| s.pitch_type.as_str()).collect();
        assert_eq!(types, vec!["CU", "FF"]);
        assert_eq!(summaries[0].count, 11);
    }

    #[test]
    fn averages_release_and_projection() {
        let mut pitches = Vec::new();
        for i in 0..10 {
            let mut p = pitch_of_type("FF");
            p.x0 = if i % 2 == 0 { -1.0 } else { 1.0 };
            p.z0 = 6.0;
            p.vx0 = 0.0;
            p.ax = 0.0;
            p.vz0 = -10.0;
            p.az = 0.0;
            pitches.push(p);
        }

        let s = &summarize(&pitches, 0.1, 10).unwrap()[0];
        assert!(s.avg_x0.abs() < 1e-12);
        assert!((s.avg_z0 - 6.0).abs() < 1e-12);
        assert!(s.avg_proj_x.abs() < 1e-12);
        assert!((s.avg_proj_z - 5.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_no_summaries() {
        let pitches: Vec<Pitch> = Vec::new();
        assert!(summarize(&pitches, 0.15, 10).unwrap().is_empty());
    }

    #[test]
    fn malformed_pitch_fails_fast() {
        let mut pitches = pitches_of_type("FF", 12);
        pitches[4].vz0 = f64::NAN;

        let err = summarize(&pitches, 0.15, 10).unwrap_err();
        match err {
            Error::MalformedPitch { index, field, .. } => {
                assert_eq!(index, 4);
                assert_eq!(field, "vz0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_pitch_in_thin_group_still_fails() {
        let mut pitches = pitches_of_type("FF", 10);
        let mut bad = pitch_of_type("KN");
        bad.az = f64::INFINITY;
        pitches.push(bad);

        assert!(summarize(&pitches, 0.15, 10).is_err());
    }

    #[test]
    fn non_finite_time_rejected() {
        let pitches = pitches_of_type("FF", 10);
        assert!(matches!(
            summarize(&pitches, f64::NAN, 10),
            Err(Error::InvalidDecisionTime { .. })
        ));
    }

    #[test]
    fn eligible_types_gate_on_count() {
        let mut pitches = pitches_of_type("FF", 10);
        pitches.extend(pitches_of_type("SL", 9));
        pitches.extend(pitches_of_type("CH", 15));

        assert_eq!(eligible_pitch_types(&pitches, 10), vec!["FF", "CH"]);
        assert_eq!(
            count_by_type(&pitches),
            vec![
                ("FF".to_string(), 10),
                ("SL".to_string(), 9),
                ("CH".to_string(), 15)
            ]
        );
    }
}
