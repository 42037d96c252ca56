//! Presentation adapter: projects a [`VisualFrame`](crate::VisualFrame) through the
//! perspective stack, emits SVG, and rasterises it with `resvg`.

pub(crate) mod project;
pub(crate) mod raster;
pub(crate) mod svg;
