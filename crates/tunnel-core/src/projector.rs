//! Trajectory projection.
//!
//! Constant-acceleration flight from the release state, independently on
//! each axis. Non-finite inputs propagate to the output; callers that need
//! clean numbers validate the pitch first.

use tunnel_common::Pitch;
use tunnel_math::{position_at, time_to_reach, PlanePoint};

/// Lateral/vertical position of `pitch` at `t` seconds after release.
///
/// `x(t) = x0 + vx0·t + ½·ax·t²`, `z(t) = z0 + vz0·t + ½·az·t²`.
pub fn project(pitch: &Pitch, t: f64) -> PlanePoint {
    PlanePoint::new(
        position_at(pitch.x0, pitch.vx0, pitch.ax, t),
        position_at(pitch.z0, pitch.vz0, pitch.az, t),
    )
}

/// Seconds from release until the pitch crosses `y = plate_y`.
///
/// `None` when the ball never reaches the plane (e.g. it is moving away from
/// the plate and decelerating).
pub fn time_to_plate(pitch: &Pitch, plate_y: f64) -> Option<f64> {
    time_to_reach(pitch.y0, pitch.vy0, pitch.ay, plate_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(x0: f64, vx0: f64, ax: f64, z0: f64, vz0: f64, az: f64) -> Pitch {
        Pitch {
            pitch_id: None,
            pitcher_id: None,
            pitcher_name: "Test".to_string(),
            pitcher_team_code: None,
            pitch_type: "FF".to_string(),
            is_throwing_stretch: false,
            x0,
            z0,
            y0: 50.0,
            vx0,
            vy0: -130.0,
            vz0,
            ax,
            ay: 28.0,
            az,
        }
    }

    #[test]
    fn release_point_at_t_zero() {
        let p = pitch(-1.5, 4.0, -8.0, 6.1, -4.0, -20.0);
        assert_eq!(project(&p, 0.0), PlanePoint::new(-1.5, 6.1));
    }

    #[test]
    fn zero_acceleration_is_linear() {
        let p = pitch(0.5, 3.0, 0.0, 6.0, -2.0, 0.0);
        let pt = project(&p, 0.2);
        assert!((pt.x - (0.5 + 3.0 * 0.2)).abs() < 1e-12);
        assert!((pt.z - (6.0 - 2.0 * 0.2)).abs() < 1e-12);
    }

    #[test]
    fn quadratic_term_applied() {
        let p = pitch(0.0, 0.0, 10.0, 0.0, 0.0, -32.0);
        let pt = project(&p, 0.5);
        assert!((pt.x - 1.25).abs() < 1e-12);
        assert!((pt.z + 4.0).abs() < 1e-12);
    }

    #[test]
    fn nan_propagates() {
        let p = pitch(f64::NAN, 0.0, 0.0, 6.0, 0.0, 0.0);
        let pt = project(&p, 0.1);
        assert!(pt.x.is_nan());
        assert_eq!(pt.z, 6.0);
    }

    #[test]
    fn time_to_plate_typical_fastball() {
        let p = pitch(0.0, 0.0, 0.0, 6.0, 0.0, 0.0);
        let t = time_to_plate(&p, 17.0 / 12.0).unwrap();
        // ~48.6 ft at ~130 ft/s with mild deceleration
        assert!(t > 0.35 && t < 0.42, "t = {}", t);
    }

    #[test]
    fn time_to_plate_none_when_moving_away() {
        let mut p = pitch(0.0, 0.0, 0.0, 6.0, 0.0, 0.0);
        p.vy0 = 10.0;
        p.ay = 5.0;
        assert!(time_to_plate(&p, 17.0 / 12.0).is_none());
    }
}
