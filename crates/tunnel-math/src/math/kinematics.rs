//! Constant-acceleration kinematics along a single axis.
//!
//! Every axis of a pitch's flight is integrated independently:
//! `p(t) = p0 + v0*t + 0.5*a*t^2`. Non-finite inputs propagate to the
//! output rather than being trapped here; callers that need clean data
//! validate before projecting.

/// Accelerations smaller than this are treated as zero when solving for time.
const ACCEL_EPS: f64 = 1e-12;

/// Position along one axis at time `t` after release.
#[inline]
pub fn position_at(p0: f64, v0: f64, a: f64, t: f64) -> f64 {
    p0 + v0 * t + 0.5 * a * t * t
}

/// Earliest non-negative time at which the axis reaches `target`.
///
/// Solves `0.5*a*t^2 + v0*t + (p0 - target) = 0` using the cancellation-free
/// form of the quadratic formula. Returns `None` when the target is never
/// reached going forward in time or when any input is non-finite.
pub fn time_to_reach(p0: f64, v0: f64, a: f64, target: f64) -> Option<f64> {
    if !(p0.is_finite() && v0.is_finite() && a.is_finite() && target.is_finite()) {
        return None;
    }
    let c = p0 - target;
    if c == 0.0 {
        return Some(0.0);
    }

    if a.abs() < ACCEL_EPS {
        if v0 == 0.0 {
            return None;
        }
        let t = -c / v0;
        return (t >= 0.0).then_some(t);
    }

    let half_a = 0.5 * a;
    let disc = v0 * v0 - 4.0 * half_a * c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let q = -0.5 * (v0 + v0.signum() * sqrt_disc);
    let mut roots = [f64::NAN, f64::NAN];
    roots[0] = q / half_a;
    if q != 0.0 {
        roots[1] = c / q;
    }

    roots
        .iter()
        .copied()
        .filter(|t| t.is_finite() && *t >= 0.0)
        .fold(None, |best: Option<f64>, t| match best {
            Some(b) if b <= t => Some(b),
            _ => Some(t),
        })
}
