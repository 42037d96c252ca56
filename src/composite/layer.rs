use crate::foundation::error::{PrismaError, PrismaResult};
use crate::foundation::math::require_non_negative;
use crate::geometry::spec::GeometrySpec;

/// Rule selecting the single emphasised layer of a stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocalRule {
    /// `floor(layer_count / 2)`.
    #[default]
    Center,
    /// Index `0`, the rearmost layer.
    First,
    /// An explicit index, which must be `< layer_count`.
    Fixed(u32),
}

impl FocalRule {
    /// Resolve to a concrete layer index for a stack of `layer_count` layers.
    pub fn resolve(self, layer_count: u32) -> PrismaResult<u32> {
        if layer_count == 0 {
            return Err(PrismaError::validation("layer_count must be >= 1"));
        }
        match self {
            Self::Center => Ok(layer_count / 2),
            Self::First => Ok(0),
            Self::Fixed(i) if i < layer_count => Ok(i),
            Self::Fixed(i) => Err(PrismaError::validation(format!(
                "focal index {i} out of range for {layer_count} layers"
            ))),
        }
    }
}

/// Linear falloff of scale and opacity with simulated depth.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FalloffParams {
    /// Scale lost per unit of `|depth_offset|`.
    pub scale_rate: f64,
    /// Opacity lost per unit of `|depth_offset|`.
    pub opacity_rate: f64,
    /// Opacity never drops below this floor.
    pub min_opacity: f64,
    /// Which layer receives emphasis styling.
    #[serde(default)]
    pub focal: FocalRule,
}

/// Falloff of the hero prism.
pub const GEOMETRIC_PRISM_FALLOFF: FalloffParams = FalloffParams {
    scale_rate: 0.015,
    opacity_rate: 0.04,
    min_opacity: 0.15,
    focal: FocalRule::Center,
};

/// Falloff of the interactive prism. Its emphasis sits on the rearmost layer.
pub const PRISMA3D_FALLOFF: FalloffParams = FalloffParams {
    scale_rate: 0.008,
    opacity_rate: 0.08,
    min_opacity: 0.0,
    focal: FocalRule::First,
};

impl Default for FalloffParams {
    fn default() -> Self {
        GEOMETRIC_PRISM_FALLOFF
    }
}

impl FalloffParams {
    /// Check rates and floor.
    pub fn validate(&self) -> PrismaResult<()> {
        require_non_negative("scale_rate", self.scale_rate)?;
        require_non_negative("opacity_rate", self.opacity_rate)?;
        if !(0.0..=1.0).contains(&self.min_opacity) {
            return Err(PrismaError::validation(format!(
                "min_opacity must be in [0, 1] (got {})",
                self.min_opacity
            )));
        }
        Ok(())
    }
}

/// Derived per-layer compositing parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerState {
    /// Layer index in `[0, layer_count)`, back to front.
    pub index: u32,
    /// Translation along the simulated depth axis.
    pub depth_offset: f64,
    /// Uniform scale in `[0, 1]`.
    pub scale: f64,
    /// Opacity in `[min_opacity, 1]`.
    pub opacity: f64,
    /// `true` for exactly one layer of the stack.
    pub is_focal_layer: bool,
}

/// Compositing parameters for one layer.
///
/// `depth_offset = (index - layer_count / 2) * spacing`, except that a single-layer stack
/// sits at depth `0`. Scale is clamped at `0` so deep layers never mirror.
pub fn layer_state(
    layer_count: u32,
    index: u32,
    spacing: f64,
    falloff: &FalloffParams,
) -> PrismaResult<LayerState> {
    if layer_count == 0 {
        return Err(PrismaError::validation("layer_count must be >= 1"));
    }
    if index >= layer_count {
        return Err(PrismaError::validation(format!(
            "layer index {index} out of range for {layer_count} layers"
        )));
    }
    require_non_negative("layer_spacing", spacing)?;
    falloff.validate()?;

    let depth_offset = if layer_count == 1 {
        0.0
    } else {
        (f64::from(index) - f64::from(layer_count) / 2.0) * spacing
    };
    let distance = depth_offset.abs();
    let scale = (1.0 - distance * falloff.scale_rate).max(0.0);
    let opacity = (1.0 - distance * falloff.opacity_rate).clamp(falloff.min_opacity, 1.0);
    let focal = falloff.focal.resolve(layer_count)?;

    Ok(LayerState {
        index,
        depth_offset,
        scale,
        opacity,
        is_focal_layer: index == focal,
    })
}

/// The whole stack, back to front.
pub fn layer_stack(spec: &GeometrySpec, falloff: &FalloffParams) -> PrismaResult<Vec<LayerState>> {
    spec.validate()?;
    (0..spec.layer_count)
        .map(|i| layer_state(spec.layer_count, i, spec.layer_spacing, falloff))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/composite/layer.rs"]
mod tests;
