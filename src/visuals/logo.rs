use crate::animation::channel::{ChannelSpec, RepeatMode};
use crate::animation::ease::Ease;
use crate::animation::scope::ChannelScope;
use crate::animation::timeline::Timeline;
use crate::composite::draw::{DrawOp, LayerDraw, LayerTransform, Stroke};
use crate::composite::layer::LayerState;
use crate::foundation::core::{Circle, PRISMA_BLUE, PRISMA_WHITE, Point, Rgba8};
use crate::foundation::error::PrismaResult;
use crate::foundation::math::require_positive;
use crate::geometry::triangle::{inscribed_inner_triangle, inscribed_triangle};
use crate::interaction::host::HostCapabilities;
use crate::visuals::frame::{StackPose, Visual, VisualFrame, VisualKind};

/// Options of the brand mark.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Edge of the square mark.
    pub size: f64,
    /// Spin the orbits and pulse the triangle.
    pub animated: bool,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            size: 120.0,
            animated: true,
        }
    }
}

/// One dashed orbit ring around the mark.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Orbit {
    name: &'static str,
    radius_ratio: f64,
    dash: [f64; 2],
    color: Rgba8,
    turn_deg: f64,
    period_secs: f64,
}

const ORBITS: [Orbit; 3] = [
    Orbit {
        name: "orbit_outer",
        radius_ratio: 1.3,
        dash: [4.0, 8.0],
        color: Rgba8 { a: 51, ..PRISMA_BLUE },
        turn_deg: 360.0,
        period_secs: 20.0,
    },
    Orbit {
        name: "orbit_middle",
        radius_ratio: 1.15,
        dash: [2.0, 6.0],
        color: Rgba8 { a: 26, ..PRISMA_WHITE },
        turn_deg: -360.0,
        period_secs: 15.0,
    },
    Orbit {
        name: "orbit_inner",
        radius_ratio: 0.85,
        dash: [1.0, 4.0],
        color: Rgba8 { a: 38, ..PRISMA_BLUE },
        turn_deg: 360.0,
        period_secs: 25.0,
    },
];

const PULSE: &str = "triangle_opacity";
const PULSE_LOW: f64 = 0.6;
const PULSE_SECS: f64 = 2.0;
const RADIUS_RATIO: f64 = 0.35;
const DOT_RADIUS: f64 = 2.0;

/// Triangle mark with three counter-rotating dashed orbits.
#[derive(Debug)]
pub struct PrismaLogo {
    config: LogoConfig,
    center: Point,
    triangle: Vec<Point>,
    inner: Vec<Point>,
    channels: Option<ChannelScope>,
}

impl PrismaLogo {
    /// Build the mark; animated marks start their orbit and pulse channels.
    #[tracing::instrument(skip(timeline))]
    pub fn mount(
        config: LogoConfig,
        timeline: &mut Timeline,
        host: &HostCapabilities,
    ) -> PrismaResult<Self> {
        let size = require_positive("logo size", config.size)?;
        let center = Point::new(size / 2.0, size / 2.0);
        let r = size * RADIUS_RATIO;
        let triangle = inscribed_triangle(center, r)?.to_vec();
        let inner = inscribed_inner_triangle(center, r)?.to_vec();

        let channels = if config.animated && host.allows_motion() {
            Some(ChannelScope::acquire(timeline, "logo", |scope, tl| {
                for orbit in &ORBITS {
                    scope.register(
                        tl,
                        ChannelSpec::new(orbit.name, 0.0, orbit.turn_deg, orbit.period_secs)
                            .repeat(RepeatMode::Loop),
                    )?;
                }
                scope.register(
                    tl,
                    ChannelSpec::new(PULSE, 1.0, PULSE_LOW, PULSE_SECS)
                        .repeat(RepeatMode::PingPong)
                        .ease(Ease::InOutSine),
                )
            })?)
        } else {
            None
        };

        Ok(Self {
            config,
            center,
            triangle,
            inner,
            channels,
        })
    }

    /// Options the mark was mounted with.
    pub fn config(&self) -> &LogoConfig {
        &self.config
    }

    /// Current spin of each orbit, outermost first.
    pub fn orbit_rotations(&self) -> [f64; 3] {
        ORBITS.map(|o| self.channel(o.name, 0.0))
    }

    /// Current opacity of the main triangle.
    pub fn triangle_opacity(&self) -> f64 {
        self.channel(PULSE, 1.0)
    }

    fn channel(&self, name: &str, rest: f64) -> f64 {
        self.channels
            .as_ref()
            .map_or(rest, |scope| scope.value_or(name, rest))
    }

    /// The mark as a single flat layer.
    pub fn layer(&self) -> LayerDraw {
        let r = self.config.size * RADIUS_RATIO;
        let rotations = self.orbit_rotations();
        let mut ops: Vec<DrawOp> = ORBITS
            .iter()
            .zip(rotations)
            .map(|(orbit, rotation_deg)| DrawOp::Circle {
                circle: Circle::new(self.center, r * orbit.radius_ratio),
                stroke: Stroke::solid(orbit.color, 1.0).dashed(orbit.dash),
                rotation_deg,
            })
            .collect();
        ops.push(DrawOp::Polygon {
            points: self.triangle.clone(),
            stroke: Stroke::solid(PRISMA_WHITE.with_alpha(self.triangle_opacity()), 1.5),
        });
        ops.push(DrawOp::Polygon {
            points: self.inner.clone(),
            stroke: Stroke::solid(PRISMA_BLUE.with_alpha(0.4), 1.0),
        });
        ops.push(DrawOp::Dot {
            center: self.center,
            radius: DOT_RADIUS,
            fill: PRISMA_BLUE,
        });
        LayerDraw {
            state: flat_layer(),
            transform: LayerTransform {
                translate_z: 0.0,
                scale: 1.0,
            },
            group_opacity: 1.0,
            size: (self.config.size, self.config.size),
            ops,
        }
    }
}

/// Compositor state of a visual drawn as one flat layer.
pub(crate) fn flat_layer() -> LayerState {
    LayerState {
        index: 0,
        depth_offset: 0.0,
        scale: 1.0,
        opacity: 1.0,
        is_focal_layer: true,
    }
}

impl Visual for PrismaLogo {
    fn kind(&self) -> VisualKind {
        VisualKind::Logo
    }

    fn frame(&self) -> VisualFrame {
        VisualFrame {
            kind: VisualKind::Logo,
            size: (self.config.size, self.config.size),
            perspective: None,
            pose: StackPose::default(),
            opacity: 1.0,
            layers: vec![self.layer()],
            faces: Vec::new(),
            glow: None,
        }
    }

    fn is_animated(&self) -> bool {
        self.channels.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visuals/logo.rs"]
mod tests;
