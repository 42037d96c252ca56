use crate::foundation::core::Point;
use crate::foundation::error::PrismaResult;
use crate::foundation::math::require_positive;

/// Approximation of `sin(60°)` used for every triangle height.
pub const SIN_60: f64 = 0.866;
/// Vertical position of the centroid used by spokes and rings, as a fraction of `base_size`.
pub const CENTROID_Y: f64 = 0.433;

/// Hollow-core ratios: apex height, base height, base-left x, base-right x.
const INNER_APEX_Y: f64 = 0.2;
const INNER_BASE_Y: f64 = 0.72;
const INNER_LEFT_X: f64 = 0.2;
const INNER_RIGHT_X: f64 = 0.8;

/// Outer triangle `[apex, base-left, base-right]` inside a `base_size x base_size*0.866` box.
pub fn outer_triangle(base_size: f64) -> PrismaResult<[Point; 3]> {
    let b = require_positive("base_size", base_size)?;
    Ok([
        Point::new(b / 2.0, 0.0),
        Point::new(0.0, b * SIN_60),
        Point::new(b, b * SIN_60),
    ])
}

/// Hand-tuned inner triangle forming the visible hollow core.
pub fn inner_triangle(base_size: f64) -> PrismaResult<[Point; 3]> {
    let b = require_positive("base_size", base_size)?;
    Ok([
        Point::new(b / 2.0, b * INNER_APEX_Y),
        Point::new(b * INNER_LEFT_X, b * INNER_BASE_Y),
        Point::new(b * INNER_RIGHT_X, b * INNER_BASE_Y),
    ])
}

/// Centre used by radial spokes and concentric rings.
pub fn centroid(base_size: f64) -> PrismaResult<Point> {
    let b = require_positive("base_size", base_size)?;
    Ok(Point::new(b / 2.0, b * CENTROID_Y))
}

/// Upward equilateral triangle inscribed in a circle of `radius` around `center`.
pub fn inscribed_triangle(center: Point, radius: f64) -> PrismaResult<[Point; 3]> {
    let r = require_positive("radius", radius)?;
    Ok([
        Point::new(center.x, center.y - r),
        Point::new(center.x - r * SIN_60, center.y + r * 0.5),
        Point::new(center.x + r * SIN_60, center.y + r * 0.5),
    ])
}

/// Smaller hollow triangle drawn inside [`inscribed_triangle`] by the logo mark.
pub fn inscribed_inner_triangle(center: Point, radius: f64) -> PrismaResult<[Point; 3]> {
    let r = require_positive("radius", radius)?;
    Ok([
        Point::new(center.x, center.y - r * 0.4),
        Point::new(center.x - r * 0.35, center.y + r * 0.2),
        Point::new(center.x + r * 0.35, center.y + r * 0.2),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/triangle.rs"]
mod tests;
