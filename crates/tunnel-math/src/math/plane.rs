//! Points and distances in the catcher-view plane (lateral x, vertical z).

use serde::{Deserialize, Serialize};

/// A point in the plane perpendicular to the pitch's line of flight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanePoint {
    /// Lateral offset (ft), catcher's view.
    pub x: f64,
    /// Height above ground (ft).
    pub z: f64,
}

impl PlanePoint {
    pub const fn new(x: f64, z: f64) -> Self {
        PlanePoint { x, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &PlanePoint) -> f64 {
        euclidean_2d(self.x - other.x, self.z - other.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.z.is_finite()
    }
}

/// `sqrt(dx^2 + dz^2)` without intermediate overflow.
///
/// Symmetric in the sign of both components, so `d(a, b) == d(b, a)` exactly.
#[inline]
pub fn euclidean_2d(dx: f64, dz: f64) -> f64 {
    dx.hypot(dz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_345() {
        let a = PlanePoint::new(0.0, 0.0);
        let b = PlanePoint::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = PlanePoint::new(0.013, 5.9);
        let b = PlanePoint::new(-0.27, 4.81);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = PlanePoint::new(-1.5, 6.2);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn finite_check() {
        assert!(PlanePoint::new(1.0, 2.0).is_finite());
        assert!(!PlanePoint::new(f64::NAN, 2.0).is_finite());
    }
}
