use crate::animation::channel::{ChannelSpec, RepeatMode};
use crate::animation::ease::Ease;
use crate::animation::scope::ChannelScope;
use crate::animation::timeline::Timeline;
use crate::composite::draw::{DrawOp, LayerDraw};
use crate::composite::layer::{FalloffParams, GEOMETRIC_PRISM_FALLOFF, layer_stack};
use crate::composite::style::LayerStyle;
use crate::foundation::core::{PRISMA_BLUE, Point};
use crate::foundation::error::PrismaResult;
use crate::geometry::radial::{RingParams, SpokeParams, concentric_rings, radial_spokes};
use crate::geometry::spec::GeometrySpec;
use crate::geometry::triangle::{SIN_60, inner_triangle, outer_triangle};
use crate::interaction::host::HostCapabilities;
use crate::visuals::frame::{
    AmbientGlow, FaceHinge, PERSPECTIVE, SideFace, StackPose, Visual, VisualFrame, VisualKind,
};

/// Options of the hero prism.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeometricPrismConfig {
    /// Container edge; the prism base is half of it.
    pub size: f64,
    /// Stacked layers.
    pub layers: u32,
    /// Depth between layers.
    pub layer_spacing: f64,
    /// Scale and opacity falloff.
    pub falloff: FalloffParams,
    /// Run the spin and float channels.
    pub animated: bool,
    /// Seconds per full turn.
    pub spin_secs: f64,
    /// Float amplitude (upwards).
    pub float_px: f64,
    /// Seconds per float half-cycle.
    pub float_secs: f64,
}

impl Default for GeometricPrismConfig {
    fn default() -> Self {
        Self {
            size: 300.0,
            layers: 12,
            layer_spacing: 8.0,
            falloff: GEOMETRIC_PRISM_FALLOFF,
            animated: true,
            spin_secs: 40.0,
            float_px: 15.0,
            float_secs: 4.0,
        }
    }
}

impl GeometricPrismConfig {
    /// Geometry parameters derived from this config.
    pub fn geometry(&self) -> PrismaResult<GeometrySpec> {
        GeometrySpec::new(self.size * 0.5, self.layers, self.layer_spacing)
    }
}

const SPIN: &str = "rotation_y";
const FLOAT: &str = "float_y";
const FACE_FOLD_DEG: f64 = 60.0;
const FACE_TINT_ALPHA: f64 = 0.05;
const GLOW_RADIUS: f64 = 96.0;

/// Layered hero prism that spins and floats.
#[derive(Debug)]
pub struct GeometricPrism {
    config: GeometricPrismConfig,
    layers: Vec<LayerDraw>,
    faces: Vec<SideFace>,
    channels: Option<ChannelScope>,
}

impl GeometricPrism {
    /// Build the layer stack and start the spin and float channels.
    ///
    /// Static (no channels) when `animated` is off or the host asks for reduced motion.
    #[tracing::instrument(skip(timeline))]
    pub fn mount(
        config: GeometricPrismConfig,
        timeline: &mut Timeline,
        host: &HostCapabilities,
    ) -> PrismaResult<Self> {
        let spec = config.geometry()?;
        let layers = build_layers(&spec, &config.falloff)?;
        let faces = side_faces(&spec);

        let channels = if config.animated && host.allows_motion() {
            Some(ChannelScope::acquire(timeline, "geometric-prism", |scope, tl| {
                scope.register(
                    tl,
                    ChannelSpec::new(SPIN, 0.0, 360.0, config.spin_secs)
                        .repeat(RepeatMode::Loop),
                )?;
                scope.register(
                    tl,
                    ChannelSpec::new(FLOAT, 0.0, -config.float_px, config.float_secs)
                        .repeat(RepeatMode::PingPong)
                        .ease(Ease::InOutSine),
                )
            })?)
        } else {
            None
        };
        tracing::debug!(layers = layers.len(), animated = channels.is_some(), "prism mounted");

        Ok(Self {
            config,
            layers,
            faces,
            channels,
        })
    }

    /// Options the prism was mounted with.
    pub fn config(&self) -> &GeometricPrismConfig {
        &self.config
    }

    /// Current spin angle.
    pub fn rotation_y(&self) -> f64 {
        self.channel(SPIN)
    }

    /// Current float offset.
    pub fn float_y(&self) -> f64 {
        self.channel(FLOAT)
    }

    fn channel(&self, name: &str) -> f64 {
        self.channels
            .as_ref()
            .map_or(0.0, |scope| scope.value_or(name, 0.0))
    }
}

impl Visual for GeometricPrism {
    fn kind(&self) -> VisualKind {
        VisualKind::GeometricPrism
    }

    fn frame(&self) -> VisualFrame {
        VisualFrame {
            kind: VisualKind::GeometricPrism,
            size: (self.config.size, self.config.size),
            perspective: Some(PERSPECTIVE),
            pose: StackPose {
                rotate_y_deg: self.rotation_y(),
                translate_y: self.float_y(),
                ..StackPose::default()
            },
            opacity: 1.0,
            layers: self.layers.clone(),
            faces: self.faces.clone(),
            glow: Some(AmbientGlow {
                radius: GLOW_RADIUS,
                color: PRISMA_BLUE.with_alpha(0.1),
                opacity: 1.0,
                translate_z: 0.0,
            }),
        }
    }

    fn is_animated(&self) -> bool {
        self.channels.is_some()
    }
}

fn build_layers(spec: &GeometrySpec, falloff: &FalloffParams) -> PrismaResult<Vec<LayerDraw>> {
    let b = spec.base_size;
    let outer = outer_triangle(b)?.to_vec();
    let inner = inner_triangle(b)?.to_vec();
    let spokes = radial_spokes(b, &SpokeParams::default())?;
    let ring_params = RingParams::default();
    let rings = concentric_rings(b, &ring_params)?;

    let states = layer_stack(spec, falloff)?;
    Ok(states
        .into_iter()
        .map(|state| {
            let style = LayerStyle::hero(&state);
            let mut ops = Vec::with_capacity(2 + spokes.len() + rings.len());
            ops.push(DrawOp::Polygon {
                points: outer.clone(),
                stroke: style.outline,
            });
            ops.push(DrawOp::Polygon {
                points: inner.clone(),
                stroke: style.inner,
            });
            ops.extend(spokes.iter().map(|&line| DrawOp::Line {
                line,
                stroke: style.spokes,
            }));
            ops.extend(rings.iter().map(|&circle| DrawOp::Circle {
                circle,
                stroke: style.rings.dashed(ring_params.dash),
                rotation_deg: 0.0,
            }));
            LayerDraw {
                state,
                transform: style.transform,
                group_opacity: style.group_opacity,
                size: (b, b * SIN_60),
                ops,
            }
        })
        .collect())
}

fn side_faces(spec: &GeometrySpec) -> Vec<SideFace> {
    let b = spec.base_size;
    let h = b * SIN_60;
    let points = [Point::new(b / 2.0, 0.0), Point::new(0.0, h), Point::new(b, h)];
    let translate_z = -f64::from(spec.layer_count) * spec.layer_spacing / 2.0;
    let tint = PRISMA_BLUE.with_alpha(FACE_TINT_ALPHA);
    vec![
        SideFace {
            hinge: FaceHinge::Left,
            rotate_y_deg: -FACE_FOLD_DEG,
            translate_z,
            points,
            tint,
        },
        SideFace {
            hinge: FaceHinge::Right,
            rotate_y_deg: FACE_FOLD_DEG,
            translate_z,
            points,
            tint,
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/visuals/geometric_prism.rs"]
mod tests;
