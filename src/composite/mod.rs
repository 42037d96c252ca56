//! Layer compositing: flat copies of a shape are offset along a simulated depth axis and
//! attenuated in scale and opacity with distance from the centre of the stack.

pub(crate) mod draw;
pub(crate) mod layer;
pub(crate) mod style;
