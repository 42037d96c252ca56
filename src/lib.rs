//! Prisma is the motion core of a design-studio site: parametric prism geometry, a layer
//! compositor that fakes depth with stacked flat copies, and a frame-driven timeline whose
//! channels are owned by the components that start them.
//!
//! The usual flow:
//!
//! - Describe a prism with a [`GeometrySpec`] and derive its [`layer_stack`]
//! - Mount a [`Visual`] against a [`Timeline`] and advance it with [`Timeline::tick`]
//! - Read a [`VisualFrame`] each tick and hand it to [`frame_to_svg`] or [`render_frame`]
//!
//! [`Stage`] wires the components of the whole site together: loader, navigation logo,
//! cursor, page reveals and page visuals, torn down and rebuilt on every navigation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod transform;

pub(crate) mod animation;
pub(crate) mod composite;
pub(crate) mod config;
pub(crate) mod geometry;
pub(crate) mod interaction;
pub(crate) mod render;
pub(crate) mod site;
pub(crate) mod visuals;

pub use crate::foundation::core::{
    Affine, Canvas, Circle, Line, PRISMA_BLACK, PRISMA_BLUE, PRISMA_WHITE, Point, Rect, Rgba8,
    Vec2,
};
pub use crate::foundation::error::{PrismaError, PrismaResult};
pub use crate::foundation::math::{EPSILON, approx_eq, deg_to_rad};

pub use crate::geometry::lattice::{cross_bars, facet_diagonals};
pub use crate::geometry::radial::{RingParams, SpokeParams, concentric_rings, radial_spokes};
pub use crate::geometry::shape::{PolygonPoints, ShapeKind, generate};
pub use crate::geometry::spec::GeometrySpec;
pub use crate::geometry::triangle::{
    CENTROID_Y, SIN_60, centroid, inner_triangle, inscribed_inner_triangle, inscribed_triangle,
    outer_triangle,
};

pub use crate::composite::draw::{
    DrawOp, Glow, LayerDraw, LayerTransform, Stroke, fingerprint_layers,
};
pub use crate::composite::layer::{
    FalloffParams, FocalRule, GEOMETRIC_PRISM_FALLOFF, LayerState, PRISMA3D_FALLOFF, layer_stack,
    layer_state,
};
pub use crate::composite::style::{InteractiveLayerStyle, LayerStyle};

pub use crate::animation::channel::{ChannelSample, ChannelSpec, RepeatMode};
pub use crate::animation::clock::{FrameClock, LAG_ADJUSTED_MS, LAG_THRESHOLD_MS};
pub use crate::animation::ease::Ease;
pub use crate::animation::reveal::{
    Reveal, RevealItemState, RevealPreset, ScrollTrigger, TriggerEvent,
};
pub use crate::animation::scope::ChannelScope;
pub use crate::animation::timeline::{
    ChannelCallbacks, ChannelHandle, ChannelId, ChannelState, TickReport, Timeline,
};

pub use crate::interaction::cursor::{CursorFollower, CursorParams, CursorState};
pub use crate::interaction::host::{HostCapabilities, PointerKind};
pub use crate::interaction::pointer::{PointerState, PointerTracker};
pub use crate::interaction::regions::{
    Region, RegionId, RegionKind, RegionRegistry, RegionWatcher,
};
pub use crate::interaction::tilt::{TiltAngles, TiltController, TiltParams};

pub use crate::visuals::frame::{
    AmbientGlow, FaceHinge, PERSPECTIVE, SideFace, StackPose, Visual, VisualFrame, VisualKind,
};
pub use crate::visuals::geometric_prism::{GeometricPrism, GeometricPrismConfig};
pub use crate::visuals::loader::{
    LoaderConfig, LoaderPhase, LoadingScreen, RING_CIRCUMFERENCE, RING_RADIUS,
};
pub use crate::visuals::logo::{LogoConfig, PrismaLogo};
pub use crate::visuals::prisma3d::{Prisma3d, Prisma3dConfig};

pub use crate::site::route::{RevealSection, Route};
pub use crate::site::stage::{HOME_PRISM_SIZE, NAV_LOGO_SIZE, Stage};

pub use crate::render::project::{Point3, Projected, Projector};
pub use crate::render::raster::{MAX_DIM, parse_svg, rasterize_svg, render_frame, save_png};
pub use crate::render::svg::{DEFAULT_CIRCLE_SEGMENTS, SvgOptions, frame_to_svg};

pub use crate::config::SceneConfig;
