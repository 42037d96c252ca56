use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{PrismaError, PrismaResult};
use crate::render::svg::{SvgOptions, frame_to_svg};
use crate::visuals::frame::VisualFrame;

/// Largest raster edge accepted.
pub const MAX_DIM: u32 = 16_384;

/// Parse an SVG document with system fonts available for labels.
pub fn parse_svg(svg: &str) -> PrismaResult<usvg::Tree> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let opts = usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    };
    usvg::Tree::from_data(svg.as_bytes(), &opts)
        .map_err(|e| PrismaError::render(format!("parse svg: {e}")))
}

/// Rasterise an SVG document into a straight-alpha RGBA image of `canvas` size.
pub fn rasterize_svg(svg: &str, canvas: Canvas) -> PrismaResult<image::RgbaImage> {
    let Canvas { width, height } = canvas;
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(PrismaError::render(format!(
            "raster size {width}x{height} outside 1..={MAX_DIM}"
        )));
    }
    let tree = parse_svg(svg)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PrismaError::render("failed to allocate pixmap"))?;
    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = pixmap.take();
    demultiply_in_place(&mut data);
    image::RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| PrismaError::render("pixmap size does not match canvas"))
}

/// Project, emit and rasterise a frame in one step.
#[tracing::instrument(skip(frame, opts), fields(kind = frame.kind.as_str()))]
pub fn render_frame(frame: &VisualFrame, opts: &SvgOptions) -> PrismaResult<image::RgbaImage> {
    let svg = frame_to_svg(frame, opts)?;
    rasterize_svg(&svg, opts.canvas)
}

/// Write an image as PNG.
pub fn save_png(img: &image::RgbaImage, path: &Path) -> PrismaResult<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "png written");
    Ok(())
}

/// Convert premultiplied RGBA8 to straight alpha.
fn demultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
