use crate::foundation::core::{Circle, Line, Point};
use crate::foundation::error::{PrismaError, PrismaResult};
use crate::foundation::math::{deg_to_rad, require_non_negative, require_positive};
use crate::geometry::triangle::centroid;

/// Radial spoke layout, expressed as ratios of `base_size`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpokeParams {
    /// Number of spokes, evenly spaced at `360 / count` degrees.
    pub count: u32,
    /// Angle of the first spoke in degrees (`-90` points up in y-down space).
    pub phase_deg: f64,
    /// Inner endpoint radius as a fraction of `base_size`.
    pub inner_ratio: f64,
    /// Outer endpoint radius as a fraction of `base_size`.
    pub outer_ratio: f64,
}

impl Default for SpokeParams {
    fn default() -> Self {
        Self {
            count: 6,
            phase_deg: -90.0,
            inner_ratio: 0.15,
            outer_ratio: 0.35,
        }
    }
}

/// Concentric ring layout: radius of ring `j` is `base_size * (first_ratio + j * step_ratio)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingParams {
    /// Number of rings.
    pub count: u32,
    /// Radius of the innermost ring as a fraction of `base_size`.
    pub first_ratio: f64,
    /// Arithmetic step between consecutive rings as a fraction of `base_size`.
    pub step_ratio: f64,
    /// Dash pattern `[dash, gap]` applied by the presentation layer.
    pub dash: [f64; 2],
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            count: 3,
            first_ratio: 0.1,
            step_ratio: 0.08,
            dash: [2.0, 4.0],
        }
    }
}

/// Spokes around the prism centroid, in draw order starting at `phase_deg`.
pub fn radial_spokes(base_size: f64, params: &SpokeParams) -> PrismaResult<Vec<Line>> {
    if params.count == 0 {
        return Err(PrismaError::validation("spoke count must be >= 1"));
    }
    require_non_negative("spoke inner_ratio", params.inner_ratio)?;
    require_non_negative("spoke outer_ratio", params.outer_ratio)?;
    if !params.phase_deg.is_finite() {
        return Err(PrismaError::validation("spoke phase must be finite"));
    }

    let c = centroid(base_size)?;
    let inner_r = base_size * params.inner_ratio;
    let outer_r = base_size * params.outer_ratio;
    let step = 360.0 / f64::from(params.count);

    Ok((0..params.count)
        .map(|j| {
            let angle = deg_to_rad(f64::from(j) * step + params.phase_deg);
            let (sin, cos) = angle.sin_cos();
            Line::new(
                Point::new(c.x + cos * inner_r, c.y + sin * inner_r),
                Point::new(c.x + cos * outer_r, c.y + sin * outer_r),
            )
        })
        .collect())
}

/// Rings around the prism centroid, innermost first.
pub fn concentric_rings(base_size: f64, params: &RingParams) -> PrismaResult<Vec<Circle>> {
    if params.count == 0 {
        return Err(PrismaError::validation("ring count must be >= 1"));
    }
    require_positive("ring first_ratio", params.first_ratio)?;
    require_non_negative("ring step_ratio", params.step_ratio)?;

    let c = centroid(base_size)?;
    Ok((0..params.count)
        .map(|j| Circle::new(c, base_size * (params.first_ratio + f64::from(j) * params.step_ratio)))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/radial.rs"]
mod tests;
