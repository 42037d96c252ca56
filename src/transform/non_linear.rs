//! Non-linear transform utilities.

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[inline]
/// Sawtooth: fractional position of `x` within a period of length `period`, in `[0, 1)`.
pub fn wrap01(x: f64, period: f64) -> f64 {
    x.rem_euclid(period) / period
}

#[inline]
/// Triangle wave over `[0, 2 * period)`: rises `0 -> 1` then mirrors back to `0`.
pub fn mirror01(x: f64, period: f64) -> f64 {
    let pos = x.rem_euclid(2.0 * period);
    if pos <= period {
        pos / period
    } else {
        (2.0 * period - pos) / period
    }
}
