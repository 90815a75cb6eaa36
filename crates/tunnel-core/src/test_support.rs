//! Pitch builders shared by unit tests.

use tunnel_common::Pitch;

/// A windup-or-stretch pitch with realistic release kinematics. The lateral
/// break depends on the pitch type so distinct types have distinct paths.
pub fn pitch_for(pitcher: &str, pitch_type: &str, stretch: bool) -> Pitch {
    let bias = pitch_type.bytes().map(f64::from).sum::<f64>() / 100.0;
    Pitch {
        pitch_id: None,
        pitcher_id: None,
        pitcher_name: pitcher.to_string(),
        pitcher_team_code: Some("LG".to_string()),
        pitch_type: pitch_type.to_string(),
        is_throwing_stretch: stretch,
        x0: -1.8,
        z0: 5.9,
        y0: 50.0,
        vx0: 4.0 + bias,
        vy0: -130.0,
        vz0: -5.0,
        ax: -8.0 * bias,
        ay: 28.0,
        az: -16.0,
    }
}

pub fn pitch_of_type(pitch_type: &str) -> Pitch {
    pitch_for("Ahn", pitch_type, false)
}

pub fn pitches_of_type(pitch_type: &str, n: usize) -> Vec<Pitch> {
    (0..n).map(|_| pitch_of_type(pitch_type)).collect()
}

/// A zero-acceleration pitch that passes through `projected` at `t`.
pub fn pitch_through(
    pitcher: &str,
    pitch_type: &str,
    release: (f64, f64),
    projected: (f64, f64),
    t: f64,
) -> Pitch {
    let mut p = pitch_for(pitcher, pitch_type, false);
    p.x0 = release.0;
    p.z0 = release.1;
    p.vx0 = (projected.0 - release.0) / t;
    p.vz0 = (projected.1 - release.1) / t;
    p.ax = 0.0;
    p.az = 0.0;
    p
}
