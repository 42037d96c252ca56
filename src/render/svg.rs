use std::f64::consts::TAU;

use crate::composite::draw::{DrawOp, LayerDraw, Stroke};
use crate::foundation::core::{Canvas, Point, PRISMA_BLACK, Rgba8};
use crate::foundation::error::{PrismaError, PrismaResult};
use crate::foundation::math::deg_to_rad;
use crate::render::project::{Point3, Projected, Projector};
use crate::transform::non_linear::clamp01;
use crate::visuals::frame::{FaceHinge, SideFace, VisualFrame};

/// Segments used to approximate a projected circle.
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 96;

/// Options for [`frame_to_svg`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Opaque background fill; `None` leaves the document transparent.
    pub background: Option<Rgba8>,
    /// Polyline resolution of circles.
    pub circle_segments: u32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: Some(PRISMA_BLACK),
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }
}

/// Emit a standalone SVG document for one visual frame.
///
/// Draw order is glow, side faces, then layers sorted far to near after the stack
/// rotation. Everything is projected on the CPU, so the document only uses flat paths,
/// gradients and blur filters.
#[tracing::instrument(skip(frame, opts), fields(kind = frame.kind.as_str(), layers = frame.layers.len()))]
pub fn frame_to_svg(frame: &VisualFrame, opts: &SvgOptions) -> PrismaResult<String> {
    let (w, h) = frame.size;
    if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
        return Err(PrismaError::render(format!(
            "frame size must be finite and > 0 (got {w}x{h})"
        )));
    }
    if opts.circle_segments < 8 {
        return Err(PrismaError::render("circle_segments must be >= 8"));
    }

    let mut doc = SvgDoc::new(Projector::new(frame, opts.canvas), opts.circle_segments);
    if let Some(glow) = &frame.glow {
        let c = doc.projector.project(Point3::new(0.0, 0.0, glow.translate_z));
        let r = glow.radius * c.scale;
        let blur = doc.blur_filter(r * 0.5);
        doc.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}" filter="url(#{blur})"/>"#,
            num(c.point.x),
            num(c.point.y),
            num(r),
            glow.color.to_hex_rgb(),
            num(glow.color.alpha_f64() * glow.opacity),
        ));
    }

    let face_box = frame.layers.first().map_or(frame.size, |l| l.size);
    for face in &frame.faces {
        doc.face(face, face_box);
    }

    let mut order: Vec<(f64, &LayerDraw)> = frame
        .layers
        .iter()
        .map(|l| (doc.projector.layer_depth(l), l))
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (_, layer) in order {
        doc.layer(layer);
    }

    let svg = doc.finish(frame.opacity, opts);
    tracing::debug!(bytes = svg.len(), "svg emitted");
    Ok(svg)
}

struct SvgDoc {
    projector: Projector,
    segments: u32,
    defs: String,
    body: String,
    next_id: u32,
}

impl SvgDoc {
    fn new(projector: Projector, segments: u32) -> Self {
        Self {
            projector,
            segments,
            defs: String::new(),
            body: String::new(),
            next_id: 0,
        }
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn blur_filter(&mut self, std_dev: f64) -> String {
        let id = self.fresh_id("blur");
        self.defs.push_str(&format!(
            r#"<filter id="{id}" x="-100%" y="-100%" width="300%" height="300%"><feGaussianBlur stdDeviation="{}"/></filter>"#,
            num(std_dev.max(0.0)),
        ));
        id
    }

    fn face(&mut self, face: &SideFace, box_size: (f64, f64)) {
        let (bw, bh) = box_size;
        let pts: Vec<Point> = face
            .points
            .iter()
            .map(|&p| self.projector.face_point(face, box_size, p).point)
            .collect();
        let (near_x, far_x) = match face.hinge {
            FaceHinge::Left => (0.0, bw),
            FaceHinge::Right => (bw, 0.0),
        };
        let from = self
            .projector
            .face_point(face, box_size, Point::new(near_x, bh / 2.0))
            .point;
        let to = self
            .projector
            .face_point(face, box_size, Point::new(far_x, bh / 2.0))
            .point;

        let id = self.fresh_id("face");
        let color = face.tint.to_hex_rgb();
        self.defs.push_str(&format!(
            r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}"><stop offset="0" stop-color="{color}" stop-opacity="{}"/><stop offset="1" stop-color="{color}" stop-opacity="0"/></linearGradient>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            num(face.tint.alpha_f64()),
        ));
        self.body.push_str(&format!(
            r#"<path d="{}" fill="url(#{id})"/>"#,
            path_data(&pts, true)
        ));
    }

    fn layer(&mut self, layer: &LayerDraw) {
        self.body.push_str(&format!(
            r#"<g opacity="{}">"#,
            num(layer.group_opacity)
        ));
        for op in &layer.ops {
            match op {
                DrawOp::Polygon { points, stroke } => {
                    let (pts, scale) = self.project_all(layer, points.iter().copied());
                    self.stroke_path(&path_data(&pts, true), stroke, scale);
                }
                DrawOp::Line { line, stroke } => {
                    let (pts, scale) = self.project_all(layer, [line.p0, line.p1]);
                    self.stroke_path(&path_data(&pts, false), stroke, scale);
                }
                DrawOp::Circle {
                    circle,
                    stroke,
                    rotation_deg,
                } => {
                    let start = deg_to_rad(*rotation_deg);
                    let n = self.segments;
                    let samples = (0..n).map(|i| {
                        let a = start + TAU * f64::from(i) / f64::from(n);
                        Point::new(
                            circle.center.x + circle.radius * a.cos(),
                            circle.center.y + circle.radius * a.sin(),
                        )
                    });
                    let (pts, _) = self.project_all(layer, samples);
                    let scale = self.projector.layer_point(layer, circle.center).scale;
                    self.stroke_path(&path_data(&pts, true), stroke, scale);
                }
                DrawOp::Dot {
                    center,
                    radius,
                    fill,
                } => {
                    let c = self.projector.layer_point(layer, *center);
                    self.body.push_str(&format!(
                        r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
                        num(c.point.x),
                        num(c.point.y),
                        num(radius * c.scale),
                        fill.to_hex_rgb(),
                        num(fill.alpha_f64()),
                    ));
                }
                DrawOp::Label {
                    anchor,
                    text,
                    size,
                    fill,
                } => {
                    let a = self.projector.layer_point(layer, *anchor);
                    self.body.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" font-family="monospace" text-anchor="middle" fill="{}" fill-opacity="{}">{}</text>"#,
                        num(a.point.x),
                        num(a.point.y),
                        num(size * a.scale),
                        fill.to_hex_rgb(),
                        num(fill.alpha_f64()),
                        escape_text(text),
                    ));
                }
            }
        }
        self.body.push_str("</g>");
    }

    /// Project local points; the scale of the first point stands in for the whole primitive.
    fn project_all(
        &self,
        layer: &LayerDraw,
        points: impl IntoIterator<Item = Point>,
    ) -> (Vec<Point>, f64) {
        let projected: Vec<Projected> = points
            .into_iter()
            .map(|p| self.projector.layer_point(layer, p))
            .collect();
        let scale = projected.first().map_or(1.0, |p| p.scale);
        (projected.into_iter().map(|p| p.point).collect(), scale)
    }

    fn stroke_path(&mut self, d: &str, stroke: &Stroke, scale: f64) {
        let width = stroke.width * scale;
        let mut dash = String::new();
        if let Some([on, off]) = stroke.dash {
            dash = format!(
                r#" stroke-dasharray="{} {}" stroke-dashoffset="{}""#,
                num(on * scale),
                num(off * scale),
                num(stroke.dash_offset * scale),
            );
        }
        if let Some(glow) = stroke.glow {
            let blur = self.blur_filter(glow.radius * scale * 0.5);
            self.body.push_str(&format!(
                r#"<path d="{d}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"{dash} filter="url(#{blur})"/>"#,
                glow.color.to_hex_rgb(),
                num(glow.color.alpha_f64()),
                num(width * 2.0),
            ));
        }
        self.body.push_str(&format!(
            r#"<path d="{d}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linejoin="round"{dash}/>"#,
            stroke.color.to_hex_rgb(),
            num(stroke.color.alpha_f64()),
            num(width),
        ));
    }

    fn finish(self, opacity: f64, opts: &SvgOptions) -> String {
        let Canvas { width, height } = opts.canvas;
        let mut out = String::with_capacity(self.defs.len() + self.body.len() + 256);
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ));
        if !self.defs.is_empty() {
            out.push_str("<defs>");
            out.push_str(&self.defs);
            out.push_str("</defs>");
        }
        if let Some(bg) = opts.background {
            out.push_str(&format!(
                r#"<rect width="{width}" height="{height}" fill="{}" fill-opacity="{}"/>"#,
                bg.to_hex_rgb(),
                num(bg.alpha_f64()),
            ));
        }
        out.push_str(&format!(r#"<g opacity="{}">"#, num(clamp01(opacity))));
        out.push_str(&self.body);
        out.push_str("</g></svg>\n");
        out
    }
}

fn path_data(points: &[Point], closed: bool) -> String {
    let mut d = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        d.push_str(if i == 0 { "M" } else { " L" });
        d.push_str(&format!("{} {}", num(p.x), num(p.y)));
    }
    if closed && !points.is_empty() {
        d.push_str(" Z");
    }
    d
}

/// Attribute number with at most three decimals.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        "0".to_string()
    } else {
        format!("{r}")
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
