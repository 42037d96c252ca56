use crate::animation::channel::{ChannelSpec, RepeatMode};
use crate::animation::timeline::{ChannelHandle, Timeline};
use crate::composite::draw::{DrawOp, LayerDraw};
use crate::composite::layer::{FalloffParams, LayerState, PRISMA3D_FALLOFF, layer_stack};
use crate::composite::style::InteractiveLayerStyle;
use crate::foundation::core::{Line, PRISMA_BLUE, Point};
use crate::foundation::error::PrismaResult;
use crate::geometry::lattice::{cross_bars, facet_diagonals};
use crate::geometry::spec::GeometrySpec;
use crate::geometry::triangle::{SIN_60, outer_triangle};
use crate::interaction::host::HostCapabilities;
use crate::interaction::pointer::PointerState;
use crate::interaction::tilt::{TiltController, TiltParams};
use crate::visuals::frame::{AmbientGlow, PERSPECTIVE, StackPose, Visual, VisualFrame, VisualKind};

/// Options of the interactive prism.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Prisma3dConfig {
    /// Container edge; the triangle is 40 % of it.
    pub size: f64,
    /// Stacked layers.
    pub layers: u32,
    /// Depth between layers.
    pub layer_spacing: f64,
    /// Scale and opacity falloff.
    pub falloff: FalloffParams,
    /// Run the spin channel.
    pub animated: bool,
    /// Seconds per full turn.
    pub spin_secs: f64,
    /// Lattice bars per layer.
    pub bars: u32,
    /// Pointer tilt response.
    pub tilt: TiltParams,
}

impl Default for Prisma3dConfig {
    fn default() -> Self {
        Self {
            size: 400.0,
            layers: 8,
            layer_spacing: 12.0,
            falloff: PRISMA3D_FALLOFF,
            animated: true,
            spin_secs: 60.0,
            bars: 5,
            tilt: TiltParams::default(),
        }
    }
}

impl Prisma3dConfig {
    /// Geometry parameters derived from this config.
    pub fn geometry(&self) -> PrismaResult<GeometrySpec> {
        GeometrySpec::new(self.size * 0.4, self.layers, self.layer_spacing)
    }
}

const GLOW_RADIUS: f64 = 64.0;
const GLOW_DEPTH: f64 = -20.0;

/// Lattice prism that spins slowly and tilts toward the pointer.
///
/// The stack is rotated by the tilt angles plus the spin angle about the vertical axis.
#[derive(Debug)]
pub struct Prisma3d {
    config: Prisma3dConfig,
    states: Vec<LayerState>,
    outline: Vec<Point>,
    bars: Vec<Line>,
    diagonals: [Line; 3],
    size: (f64, f64),
    tilt: TiltController,
    interactive: bool,
    spin: Option<ChannelHandle>,
}

impl Prisma3d {
    /// Build the lattice and start the spin.
    ///
    /// Tilt is only wired on hosts with a fine pointer and without reduced motion.
    #[tracing::instrument(skip(timeline))]
    pub fn mount(
        config: Prisma3dConfig,
        timeline: &mut Timeline,
        host: &HostCapabilities,
    ) -> PrismaResult<Self> {
        let spec = config.geometry()?;
        let b = spec.base_size;
        let states = layer_stack(&spec, &config.falloff)?;
        let outline = outer_triangle(b)?.to_vec();
        let bars = cross_bars(b, config.bars)?;
        let diagonals = facet_diagonals(b)?;

        let spin = if config.animated && host.allows_motion() {
            Some(timeline.register_plain(
                ChannelSpec::new("rotation_y", 0.0, 360.0, config.spin_secs)
                    .repeat(RepeatMode::Loop),
            )?)
        } else {
            None
        };

        Ok(Self {
            tilt: TiltController::new(config.tilt),
            interactive: host.allows_hover() && host.allows_motion(),
            config,
            states,
            outline,
            bars,
            diagonals,
            size: (b, b * SIN_60),
            spin,
        })
    }

    /// Current spin angle.
    pub fn spin_deg(&self) -> f64 {
        self.spin.as_ref().map_or(0.0, ChannelHandle::value)
    }

    /// Final stack rotation: tilt plus spin.
    pub fn rotation(&self) -> (f64, f64) {
        let tilt = self.tilt.angles();
        (tilt.x_deg, tilt.y_deg + self.spin_deg())
    }

    /// `true` while the pointer is over the prism.
    pub fn is_hovering(&self) -> bool {
        self.tilt.is_hovering()
    }

    /// Options the prism was mounted with.
    pub fn config(&self) -> &Prisma3dConfig {
        &self.config
    }

    fn layer(&self, state: &LayerState) -> LayerDraw {
        let style = InteractiveLayerStyle::interactive(state, self.is_hovering());
        let mut ops = Vec::with_capacity(1 + self.bars.len() + self.diagonals.len());
        ops.push(DrawOp::Polygon {
            points: self.outline.clone(),
            stroke: style.outline,
        });
        ops.extend(self.bars.iter().map(|&line| DrawOp::Line {
            line,
            stroke: style.bars,
        }));
        ops.extend(self.diagonals.iter().map(|&line| DrawOp::Line {
            line,
            stroke: style.diagonals,
        }));
        LayerDraw {
            state: *state,
            transform: style.transform,
            group_opacity: style.group_opacity,
            size: self.size,
            ops,
        }
    }
}

impl Visual for Prisma3d {
    fn kind(&self) -> VisualKind {
        VisualKind::Prisma3d
    }

    fn frame(&self) -> VisualFrame {
        let (rx, ry) = self.rotation();
        VisualFrame {
            kind: VisualKind::Prisma3d,
            size: (self.config.size, self.config.size),
            perspective: Some(PERSPECTIVE),
            pose: StackPose {
                rotate_x_deg: rx,
                rotate_y_deg: ry,
                ..StackPose::default()
            },
            opacity: 1.0,
            layers: self.states.iter().map(|s| self.layer(s)).collect(),
            faces: Vec::new(),
            glow: Some(AmbientGlow {
                radius: GLOW_RADIUS,
                color: PRISMA_BLUE.with_alpha(0.1),
                opacity: if self.is_hovering() { 0.6 } else { 0.3 },
                translate_z: GLOW_DEPTH,
            }),
        }
    }

    fn is_animated(&self) -> bool {
        self.spin.is_some()
    }

    fn pointer_move(&mut self, pointer: PointerState) {
        if self.interactive {
            self.tilt.pointer_move(pointer);
        }
    }

    fn pointer_leave(&mut self, timeline: &mut Timeline) -> PrismaResult<()> {
        if self.interactive && self.tilt.is_hovering() {
            self.tilt.pointer_leave(timeline)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visuals/prisma3d.rs"]
mod tests;
