//! Pitch tunnel math utilities.

pub mod math;

pub use math::kinematics::*;
pub use math::plane::*;
pub use math::stable::*;
