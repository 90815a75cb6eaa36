//! Average flight paths for side-by-side pitch comparison.
//!
//! A path is the per-type mean position sampled from release to the group's
//! mean time-to-plate, with every sample flagged by whether it lies beyond
//! the decision point. Two paths drawn together show where a pair stays in
//! the tunnel and where it breaks apart.

use tunnel_common::{Error, Pitch, Result, TrajectoryPoint};
use tunnel_math::MeanAccumulator;

use crate::projector::{project, time_to_plate};

/// Upper bound on samples per path.
pub const MAX_PATH_SAMPLES: usize = 10_000;

/// Sampling parameters for [`flight_path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSampling {
    /// Decision-point offset (s) used to flag samples.
    pub decision_time_s: f64,
    /// Plane the ball must cross to reach the plate (ft).
    pub plate_y_ft: f64,
    /// Spacing between samples (s).
    pub step_s: f64,
}

impl PathSampling {
    fn validate(&self) -> Result<()> {
        if !self.decision_time_s.is_finite() || self.decision_time_s < 0.0 {
            return Err(Error::InvalidDecisionTime {
                value: self.decision_time_s,
            });
        }
        if !self.plate_y_ft.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "plate_y_ft must be finite, got {}",
                self.plate_y_ft
            )));
        }
        if !self.step_s.is_finite() || self.step_s <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "path_step_s must be positive, got {}",
                self.step_s
            )));
        }
        Ok(())
    }
}

/// Mean flight path of `pitch_type` within `pitches`.
///
/// Samples are taken at `t = 0, step, 2·step, …` and the last one is clamped
/// to the group's mean time-to-plate. Pitches that never reach the plate
/// plane do not contribute to that mean. Returns an empty path when no
/// member of the type reaches the plate.
pub fn flight_path<'a, I>(
    pitches: I,
    pitch_type: &str,
    sampling: &PathSampling,
) -> Result<Vec<TrajectoryPoint>>
where
    I: IntoIterator<Item = &'a Pitch>,
{
    sampling.validate()?;

    let mut members: Vec<&Pitch> = Vec::new();
    let mut plate_times = MeanAccumulator::new();
    for (index, pitch) in pitches.into_iter().enumerate() {
        if pitch.pitch_type != pitch_type {
            continue;
        }
        pitch.validate(index)?;
        if let Some(t) = time_to_plate(pitch, sampling.plate_y_ft) {
            plate_times.push(t);
        }
        members.push(pitch);
    }

    if plate_times.is_empty() {
        return Ok(Vec::new());
    }
    let t_end = plate_times.mean();

    let steps = (t_end / sampling.step_s).ceil();
    if steps > MAX_PATH_SAMPLES as f64 {
        return Err(Error::InvalidConfig(format!(
            "path_step_s {} yields more than {} samples",
            sampling.step_s, MAX_PATH_SAMPLES
        )));
    }

    let mut times: Vec<f64> = (0..steps as usize)
        .map(|k| k as f64 * sampling.step_s)
        .filter(|t| *t < t_end)
        .collect();
    times.push(t_end);

    let path = times
        .into_iter()
        .map(|t| {
            let mut x = MeanAccumulator::with_capacity(members.len());
            let mut z = MeanAccumulator::with_capacity(members.len());
            for pitch in &members {
                let point = project(pitch, t);
                x.push(point.x);
                z.push(point.z);
            }
            TrajectoryPoint {
                pitch_type: pitch_type.to_string(),
                t,
                x: x.mean(),
                z: z.mean(),
                past_decision_point: t > sampling.decision_time_s,
            }
        })
        .collect();

    Ok(path)
}
