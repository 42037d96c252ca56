use crate::composite::draw::LayerDraw;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::math::deg_to_rad;
use crate::visuals::frame::{FaceHinge, SideFace, StackPose, VisualFrame};

/// Nearest allowed distance between a projected point and the viewer.
const MIN_VIEW_DISTANCE: f64 = 1.0;

/// Point in the stack's 3D space: `x` right, `y` down, `z` toward the viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    /// Horizontal.
    pub x: f64,
    /// Vertical, growing downward.
    pub y: f64,
    /// Depth, growing toward the viewer.
    pub z: f64,
}

impl Point3 {
    /// Build a point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn rotate_y(self, deg: f64) -> Self {
        let (s, c) = deg_to_rad(deg).sin_cos();
        Self::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }

    fn rotate_x(self, deg: f64) -> Self {
        let (s, c) = deg_to_rad(deg).sin_cos();
        Self::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }
}

/// Projected point plus its view-space depth, used for painter's ordering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Output coordinates.
    pub point: Point,
    /// Depth after the stack rotation; larger is nearer.
    pub depth: f64,
    /// Local-to-output scale at this point.
    pub scale: f64,
}

/// Maps a frame's layer-local coordinates onto an output canvas.
///
/// The stack transform composes as `translateY · rotateX · rotateY · scale` around the
/// container centre, followed by a perspective divide at `distance`. The container is
/// then fit into the canvas, preserving aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pose: StackPose,
    perspective: Option<f64>,
    origin: Point,
    fit: f64,
}

impl Projector {
    /// Projector for `frame` drawn onto `canvas`.
    pub fn new(frame: &VisualFrame, canvas: Canvas) -> Self {
        let (w, h) = frame.size;
        let cw = f64::from(canvas.width);
        let ch = f64::from(canvas.height);
        let fit = if w > 0.0 && h > 0.0 {
            (cw / w).min(ch / h)
        } else {
            1.0
        };
        Self {
            pose: frame.pose,
            perspective: frame.perspective.filter(|d| d.is_finite() && *d > 0.0),
            origin: canvas.center(),
            fit,
        }
    }

    /// Container-to-canvas scale.
    pub fn fit(&self) -> f64 {
        self.fit
    }

    /// Project a point given relative to the container centre.
    pub fn project(&self, p: Point3) -> Projected {
        let s = self.pose.scale;
        let v = Point3::new(p.x * s, p.y * s, p.z * s)
            .rotate_y(self.pose.rotate_y_deg)
            .rotate_x(self.pose.rotate_x_deg);
        let v = Point3::new(v.x, v.y + self.pose.translate_y, v.z);
        let divide = match self.perspective {
            Some(d) => d / (d - v.z).max(MIN_VIEW_DISTANCE),
            None => 1.0,
        };
        let k = divide * self.fit;
        Projected {
            point: Point::new(self.origin.x + v.x * k, self.origin.y + v.y * k),
            depth: v.z,
            scale: k * s,
        }
    }

    /// Project a point in `layer`'s local box. Layers are centred in the container.
    pub fn layer_point(&self, layer: &LayerDraw, local: Point) -> Projected {
        let (lw, lh) = layer.size;
        let ls = layer.transform.scale;
        let p = self.project(Point3::new(
            (local.x - lw / 2.0) * ls,
            (local.y - lh / 2.0) * ls,
            layer.transform.translate_z,
        ));
        Projected {
            scale: p.scale * ls,
            ..p
        }
    }

    /// Depth of a layer's centre after the stack rotation.
    pub fn layer_depth(&self, layer: &LayerDraw) -> f64 {
        self.project(Point3::new(0.0, 0.0, layer.transform.translate_z))
            .depth
    }

    /// Project a point of a side face whose local box is `box_size`, folded about its hinge.
    pub fn face_point(&self, face: &SideFace, box_size: (f64, f64), local: Point) -> Projected {
        let (w, h) = box_size;
        let hinge_x = match face.hinge {
            FaceHinge::Left => 0.0,
            FaceHinge::Right => w,
        };
        let folded = Point3::new(local.x - hinge_x, local.y - h / 2.0, face.translate_z)
            .rotate_y(face.rotate_y_deg);
        self.project(Point3::new(
            folded.x + hinge_x - w / 2.0,
            folded.y,
            folded.z,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/project.rs"]
mod tests;
