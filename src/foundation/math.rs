use crate::foundation::error::{PrismaError, PrismaResult};

/// Tolerance used when comparing derived coordinates.
pub const EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    /// Hash the bit pattern; `-0.0` is folded into `0.0` so equal coordinates hash equally.
    pub(crate) fn write_f64(&mut self, v: f64) {
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// `true` when `a` and `b` differ by at most [`EPSILON`] scaled to their magnitude.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Reject non-finite or non-positive values with a range error naming `what`.
pub fn require_positive(what: &str, v: f64) -> PrismaResult<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(PrismaError::out_of_range(what, v, "> 0"));
    }
    Ok(v)
}

/// Reject non-finite or negative values with a range error naming `what`.
pub fn require_non_negative(what: &str, v: f64) -> PrismaResult<f64> {
    if !v.is_finite() || v < 0.0 {
        return Err(PrismaError::out_of_range(what, v, ">= 0"));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
