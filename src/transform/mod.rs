//! Scalar interpolation and periodic wave helpers shared by the timeline.

pub(crate) mod linear;
pub(crate) mod non_linear;
