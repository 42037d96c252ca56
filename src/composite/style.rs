use crate::composite::draw::{Glow, LayerTransform, Stroke};
use crate::composite::layer::LayerState;
use crate::foundation::core::{PRISMA_BLUE, PRISMA_WHITE};

/// Declarative style record for one hero-prism layer.
///
/// Produced from a [`LayerState`] only; the presentation layer consumes it without
/// knowing how the values were derived.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerStyle {
    /// Depth translation and scale.
    pub transform: LayerTransform,
    /// Opacity applied to the whole layer.
    pub group_opacity: f64,
    /// Outer triangle.
    pub outline: Stroke,
    /// Hollow-core triangle.
    pub inner: Stroke,
    /// Radial spokes.
    pub spokes: Stroke,
    /// Concentric rings.
    pub rings: Stroke,
    /// `true` on the focal layer.
    pub emphasis: bool,
}

const INNER_ALPHA: f64 = 0.5;
const SPOKE_ALPHA: f64 = 0.3;
const RING_ALPHA: f64 = 0.1;
const HAIRLINE: f64 = 0.5;

impl LayerStyle {
    /// Hero prism styling: opacity is carried by stroke alpha and the focal layer is drawn
    /// solid blue with a glow.
    pub fn hero(state: &LayerState) -> Self {
        let op = state.opacity;
        let outline = if state.is_focal_layer {
            Stroke::solid(PRISMA_BLUE, 2.5).glowing(Glow {
                color: PRISMA_BLUE.with_alpha(0.6),
                radius: 20.0,
            })
        } else {
            Stroke::solid(PRISMA_WHITE.with_alpha(op), 1.0)
        };
        Self {
            transform: LayerTransform {
                translate_z: state.depth_offset,
                scale: state.scale,
            },
            group_opacity: 1.0,
            outline,
            inner: Stroke::solid(PRISMA_BLUE.with_alpha(op * INNER_ALPHA), HAIRLINE),
            spokes: Stroke::solid(PRISMA_BLUE.with_alpha(op * SPOKE_ALPHA), HAIRLINE),
            rings: Stroke::solid(PRISMA_WHITE.with_alpha(op * RING_ALPHA), HAIRLINE),
            emphasis: state.is_focal_layer,
        }
    }
}

/// Declarative style record for one interactive-prism layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InteractiveLayerStyle {
    /// Depth translation and scale.
    pub transform: LayerTransform,
    /// Opacity applied to the whole layer.
    pub group_opacity: f64,
    /// Outer triangle.
    pub outline: Stroke,
    /// Horizontal bars.
    pub bars: Stroke,
    /// Facet diagonals.
    pub diagonals: Stroke,
    /// `true` on the focal layer.
    pub emphasis: bool,
}

impl InteractiveLayerStyle {
    /// Interactive prism styling: opacity is applied to the whole layer and the focal
    /// outline glows only while hovered.
    pub fn interactive(state: &LayerState, hovering: bool) -> Self {
        let outline = if state.is_focal_layer {
            let s = Stroke::solid(PRISMA_BLUE, 2.0);
            if hovering {
                s.glowing(Glow {
                    color: PRISMA_BLUE.with_alpha(0.5),
                    radius: 15.0,
                })
            } else {
                s
            }
        } else {
            Stroke::solid(PRISMA_WHITE.with_alpha(0.3), 1.0)
        };
        Self {
            transform: LayerTransform {
                translate_z: state.depth_offset,
                scale: state.scale,
            },
            group_opacity: state.opacity,
            outline,
            bars: Stroke::solid(PRISMA_WHITE.with_alpha(0.1), HAIRLINE),
            diagonals: Stroke::solid(PRISMA_BLUE.with_alpha(0.2), HAIRLINE),
            emphasis: state.is_focal_layer,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/style.rs"]
mod tests;
