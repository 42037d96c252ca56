use crate::animation::timeline::Timeline;
use crate::composite::draw::LayerDraw;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{PrismaError, PrismaResult};
use crate::interaction::pointer::PointerState;

/// Perspective distance shared by the layered visuals.
pub const PERSPECTIVE: f64 = 1000.0;

/// Which decorative component a frame came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualKind {
    /// Layered hero prism with spokes and rings.
    GeometricPrism,
    /// Pointer-tilted lattice prism.
    Prisma3d,
    /// Brand mark with orbiting rings.
    Logo,
    /// Progress ring shown while the site loads.
    Loader,
}

impl VisualKind {
    /// Every kind.
    pub const ALL: [VisualKind; 4] = [
        VisualKind::GeometricPrism,
        VisualKind::Prisma3d,
        VisualKind::Logo,
        VisualKind::Loader,
    ];

    /// Canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GeometricPrism => "geometric_prism",
            Self::Prisma3d => "prisma3d",
            Self::Logo => "logo",
            Self::Loader => "loader",
        }
    }

    /// Parse a name, accepting `-` or `_` separators.
    pub fn parse(name: &str) -> PrismaResult<Self> {
        let norm = name.trim().to_ascii_lowercase().replace('-', "_");
        Ok(match norm.as_str() {
            "geometric_prism" | "prism" => Self::GeometricPrism,
            "prisma3d" | "prisma_3d" => Self::Prisma3d,
            "logo" => Self::Logo,
            "loader" | "loading_screen" => Self::Loader,
            _ => {
                return Err(PrismaError::validation(format!(
                    "unknown visual '{name}'"
                )));
            }
        })
    }
}

/// Transform applied to a whole layer stack.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StackPose {
    /// Rotation about the horizontal axis.
    pub rotate_x_deg: f64,
    /// Rotation about the vertical axis.
    pub rotate_y_deg: f64,
    /// Vertical offset.
    pub translate_y: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl Default for StackPose {
    fn default() -> Self {
        Self {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }
}

/// Which edge a side face hinges on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceHinge {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

/// Tinted triangular face folded out of the stack.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SideFace {
    /// Hinge edge.
    pub hinge: FaceHinge,
    /// Fold angle about the hinge.
    pub rotate_y_deg: f64,
    /// Depth of the face plane.
    pub translate_z: f64,
    /// Triangle in the face's local box.
    pub points: [Point; 3],
    /// Tint at the hinge, fading to transparent.
    pub tint: Rgba8,
}

/// Soft blurred disc behind a stack.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AmbientGlow {
    /// Disc radius.
    pub radius: f64,
    /// Colour including alpha.
    pub color: Rgba8,
    /// Extra opacity multiplier.
    pub opacity: f64,
    /// Depth of the disc.
    pub translate_z: f64,
}

/// Everything the presentation layer needs to draw one visual at the current tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualFrame {
    /// Source component.
    pub kind: VisualKind,
    /// Container width and height.
    pub size: (f64, f64),
    /// Perspective distance; `None` draws layers flat.
    pub perspective: Option<f64>,
    /// Whole-stack transform.
    pub pose: StackPose,
    /// Container opacity.
    pub opacity: f64,
    /// Back-to-front layers, each centred in the container.
    pub layers: Vec<LayerDraw>,
    /// Side faces drawn behind the layers.
    pub faces: Vec<SideFace>,
    /// Glow drawn first.
    pub glow: Option<AmbientGlow>,
}

/// A mounted decorative component.
///
/// Components own their channels; dropping one releases them.
pub trait Visual {
    /// Component kind.
    fn kind(&self) -> VisualKind;

    /// Drawable state at the current tick.
    fn frame(&self) -> VisualFrame;

    /// `true` while the component owns running channels.
    fn is_animated(&self) -> bool;

    /// Pointer moved over the component.
    fn pointer_move(&mut self, _pointer: PointerState) {}

    /// Pointer left the component.
    fn pointer_leave(&mut self, _timeline: &mut Timeline) -> PrismaResult<()> {
        Ok(())
    }
}
