//! Linear transform helpers.

#[inline]
/// Unclamped linear interpolation between two scalars.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
