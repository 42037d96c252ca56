use crate::foundation::core::{Line, Point};
use crate::foundation::error::{PrismaError, PrismaResult};
use crate::foundation::math::require_positive;
use crate::geometry::triangle::{CENTROID_Y, SIN_60};

/// Horizontal bars at heights `h * p` with `p = (j + 1) / (count + 1)`, spanning
/// `x = b/2 * p ..= b - b/2 * p`.
///
/// The bars narrow toward the base instead of following the triangle's edges.
pub fn cross_bars(base_size: f64, count: u32) -> PrismaResult<Vec<Line>> {
    let b = require_positive("base_size", base_size)?;
    if count == 0 {
        return Err(PrismaError::validation("cross bar count must be >= 1"));
    }
    let h = b * SIN_60;
    let slices = f64::from(count + 1);
    Ok((0..count)
        .map(|j| {
            let progress = f64::from(j + 1) / slices;
            let y = h * progress;
            let left_x = b / 2.0 * progress;
            let right_x = b - left_x;
            Line::new(Point::new(left_x, y), Point::new(right_x, y))
        })
        .collect())
}

/// The three facet diagonals: apex to both edge midpoints, then base-left to the middle.
pub fn facet_diagonals(base_size: f64) -> PrismaResult<[Line; 3]> {
    let b = require_positive("base_size", base_size)?;
    let mid_y = b * CENTROID_Y;
    let apex = Point::new(b / 2.0, 0.0);
    Ok([
        Line::new(apex, Point::new(b * 0.25, mid_y)),
        Line::new(apex, Point::new(b * 0.75, mid_y)),
        Line::new(Point::new(0.0, b * SIN_60), Point::new(b * 0.5, mid_y)),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/lattice.rs"]
mod tests;
