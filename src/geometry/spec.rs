use crate::foundation::error::{PrismaError, PrismaResult};
use crate::foundation::math::{require_non_negative, require_positive};

/// Parameters of one parametric prism instance.
///
/// All derived coordinates are pure functions of `base_size`; `layer_count` and
/// `layer_spacing` only drive the compositor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometrySpec {
    /// Reference linear dimension (`> 0`).
    pub base_size: f64,
    /// Number of stacked flat copies (`>= 1`).
    pub layer_count: u32,
    /// Per-layer depth offset unit (`>= 0`).
    pub layer_spacing: f64,
}

impl GeometrySpec {
    /// Create a validated spec.
    pub fn new(base_size: f64, layer_count: u32, layer_spacing: f64) -> PrismaResult<Self> {
        let spec = Self {
            base_size,
            layer_count,
            layer_spacing,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check the invariants of this spec.
    pub fn validate(&self) -> PrismaResult<()> {
        require_positive("base_size", self.base_size)?;
        require_non_negative("layer_spacing", self.layer_spacing)?;
        if self.layer_count == 0 {
            return Err(PrismaError::validation("layer_count must be >= 1"));
        }
        Ok(())
    }
}
