//! Core math modules.

pub mod kinematics;
pub mod plane;
pub mod stable;
