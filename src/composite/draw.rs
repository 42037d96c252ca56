use crate::composite::layer::LayerState;
use crate::foundation::core::{Circle, Line, Point, Rgba8};
use crate::foundation::math::Fnv1a64;

/// Soft halo drawn behind an emphasised stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Glow {
    /// Halo colour including alpha.
    pub color: Rgba8,
    /// Blur radius in local units.
    pub radius: f64,
}

/// Stroke attributes for an outline primitive.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Colour including alpha.
    pub color: Rgba8,
    /// Line width in local units.
    pub width: f64,
    /// Optional `[dash, gap]` pattern.
    pub dash: Option<[f64; 2]>,
    /// Shift of the dash pattern along the path.
    #[serde(default)]
    pub dash_offset: f64,
    /// Optional emphasis halo.
    pub glow: Option<Glow>,
}

impl Stroke {
    /// Solid stroke without dash or glow.
    pub fn solid(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
            dash_offset: 0.0,
            glow: None,
        }
    }

    /// Same stroke with a dash pattern.
    pub fn dashed(mut self, dash: [f64; 2]) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Same stroke with its dash pattern shifted by `offset`.
    pub fn dash_offset(mut self, offset: f64) -> Self {
        self.dash_offset = offset;
        self
    }

    /// Same stroke with a glow.
    pub fn glowing(mut self, glow: Glow) -> Self {
        self.glow = Some(glow);
        self
    }
}

/// One flat drawing instruction in a layer's local coordinate space.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Closed outline.
    Polygon {
        /// Vertices in winding order.
        points: Vec<Point>,
        /// Outline stroke.
        stroke: Stroke,
    },
    /// Straight segment.
    Line {
        /// Segment endpoints.
        line: Line,
        /// Stroke.
        stroke: Stroke,
    },
    /// Circle outline, optionally spun about its own centre (visible only when dashed).
    Circle {
        /// Geometry.
        circle: Circle,
        /// Stroke.
        stroke: Stroke,
        /// Spin in degrees about the circle centre.
        rotation_deg: f64,
    },
    /// Filled disc.
    Dot {
        /// Centre.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill colour.
        fill: Rgba8,
    },
    /// Single line of text centred on `anchor`.
    Label {
        /// Centre of the text baseline box.
        anchor: Point,
        /// Content.
        text: String,
        /// Font size in local units.
        size: f64,
        /// Fill colour.
        fill: Rgba8,
    },
}

/// Translation and scale applied to a flat layer by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerTransform {
    /// Offset along the simulated depth axis.
    pub translate_z: f64,
    /// Uniform scale about the layer centre.
    pub scale: f64,
}

/// A fully described flat layer ready for presentation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerDraw {
    /// Compositor output this layer was built from.
    pub state: LayerState,
    /// Depth translation and scale.
    pub transform: LayerTransform,
    /// Opacity applied to the whole layer group.
    pub group_opacity: f64,
    /// Width and height of the layer's local box; the layer is centred on its parent.
    pub size: (f64, f64),
    /// Primitives in painter's order.
    pub ops: Vec<DrawOp>,
}

fn hash_point(h: &mut Fnv1a64, p: Point) {
    h.write_f64(p.x);
    h.write_f64(p.y);
}

fn hash_stroke(h: &mut Fnv1a64, s: &Stroke) {
    h.write_bytes(&[s.color.r, s.color.g, s.color.b, s.color.a]);
    h.write_f64(s.width);
    if let Some([d, g]) = s.dash {
        h.write_f64(d);
        h.write_f64(g);
        h.write_f64(s.dash_offset);
    }
    h.write_u8(u8::from(s.glow.is_some()));
}

/// Stable 64-bit fingerprint of a layer list; equal geometry and styling hash equally.
pub fn fingerprint_layers(layers: &[LayerDraw]) -> u64 {
    let mut h = Fnv1a64::new_default();
    for layer in layers {
        h.write_u64(u64::from(layer.state.index));
        h.write_f64(layer.transform.translate_z);
        h.write_f64(layer.transform.scale);
        h.write_f64(layer.group_opacity);
        for op in &layer.ops {
            match op {
                DrawOp::Polygon { points, stroke } => {
                    h.write_u8(0);
                    points.iter().for_each(|p| hash_point(&mut h, *p));
                    hash_stroke(&mut h, stroke);
                }
                DrawOp::Line { line, stroke } => {
                    h.write_u8(1);
                    hash_point(&mut h, line.p0);
                    hash_point(&mut h, line.p1);
                    hash_stroke(&mut h, stroke);
                }
                DrawOp::Circle {
                    circle,
                    stroke,
                    rotation_deg,
                } => {
                    h.write_u8(2);
                    hash_point(&mut h, circle.center);
                    h.write_f64(circle.radius);
                    h.write_f64(*rotation_deg);
                    hash_stroke(&mut h, stroke);
                }
                DrawOp::Dot {
                    center,
                    radius,
                    fill,
                } => {
                    h.write_u8(3);
                    hash_point(&mut h, *center);
                    h.write_f64(*radius);
                    h.write_bytes(&[fill.r, fill.g, fill.b, fill.a]);
                }
                DrawOp::Label {
                    anchor,
                    text,
                    size,
                    fill,
                } => {
                    h.write_u8(4);
                    hash_point(&mut h, *anchor);
                    h.write_bytes(text.as_bytes());
                    h.write_f64(*size);
                    h.write_bytes(&[fill.r, fill.g, fill.b, fill.a]);
                }
            }
        }
    }
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/composite/draw.rs"]
mod tests;
