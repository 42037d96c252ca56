use crate::foundation::core::{Circle, Line, Point};
use crate::foundation::error::{PrismaError, PrismaResult};
use crate::geometry::lattice::{cross_bars, facet_diagonals};
use crate::geometry::radial::{RingParams, SpokeParams, concentric_rings, radial_spokes};
use crate::geometry::triangle::{inner_triangle, outer_triangle};

/// Shape families produced by the geometry generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Outer prism outline.
    OuterTriangle,
    /// Hollow-core triangle.
    InnerTriangle,
    /// Spokes around the centroid.
    RadialSpokes,
    /// Dashed rings around the centroid.
    ConcentricRings,
    /// Horizontal bars of the interactive prism.
    CrossBars,
    /// Facet diagonals of the interactive prism.
    FacetDiagonals,
}

impl ShapeKind {
    /// Every kind, in canonical draw order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::OuterTriangle,
        ShapeKind::InnerTriangle,
        ShapeKind::RadialSpokes,
        ShapeKind::ConcentricRings,
        ShapeKind::CrossBars,
        ShapeKind::FacetDiagonals,
    ];

    /// Parse a kebab/snake-case kind name (`outer-triangle`, `concentric_rings`, ...).
    pub fn parse(name: &str) -> PrismaResult<Self> {
        let norm = name.trim().to_ascii_lowercase().replace('-', "_");
        match norm.as_str() {
            "outer_triangle" | "outer" => Ok(Self::OuterTriangle),
            "inner_triangle" | "inner" => Ok(Self::InnerTriangle),
            "radial_spokes" | "spokes" => Ok(Self::RadialSpokes),
            "concentric_rings" | "rings" => Ok(Self::ConcentricRings),
            "cross_bars" | "bars" => Ok(Self::CrossBars),
            "facet_diagonals" | "diagonals" => Ok(Self::FacetDiagonals),
            _ => Err(PrismaError::validation(format!(
                "unknown shape kind '{name}'"
            ))),
        }
    }
}

/// Ordered output of the geometry generator. Point order defines winding and draw order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolygonPoints {
    /// Closed polygon.
    Polygon {
        /// Vertices in winding order.
        points: Vec<Point>,
    },
    /// Independent line segments.
    Segments {
        /// Segments in draw order.
        lines: Vec<Line>,
    },
    /// Circles sharing one centre.
    Rings {
        /// Common centre.
        center: Point,
        /// Radii, innermost first.
        radii: Vec<f64>,
    },
}

impl PolygonPoints {
    /// Every coordinate (and radius, as `(r, 0)`) flattened in order; used for comparisons.
    pub fn coordinates(&self) -> Vec<f64> {
        match self {
            Self::Polygon { points } => points.iter().flat_map(|p| [p.x, p.y]).collect(),
            Self::Segments { lines } => lines
                .iter()
                .flat_map(|l| [l.p0.x, l.p0.y, l.p1.x, l.p1.y])
                .collect(),
            Self::Rings { center, radii } => {
                let mut out = vec![center.x, center.y];
                out.extend(radii.iter().copied());
                out
            }
        }
    }
}

fn rings(circles: Vec<Circle>) -> PolygonPoints {
    let center = circles.first().map(|c| c.center).unwrap_or(Point::ORIGIN);
    PolygonPoints::Rings {
        center,
        radii: circles.iter().map(|c| c.radius).collect(),
    }
}

/// Generate one shape with the studio's default parameters.
pub fn generate(kind: ShapeKind, base_size: f64) -> PrismaResult<PolygonPoints> {
    Ok(match kind {
        ShapeKind::OuterTriangle => PolygonPoints::Polygon {
            points: outer_triangle(base_size)?.to_vec(),
        },
        ShapeKind::InnerTriangle => PolygonPoints::Polygon {
            points: inner_triangle(base_size)?.to_vec(),
        },
        ShapeKind::RadialSpokes => PolygonPoints::Segments {
            lines: radial_spokes(base_size, &SpokeParams::default())?,
        },
        ShapeKind::ConcentricRings => rings(concentric_rings(base_size, &RingParams::default())?),
        ShapeKind::CrossBars => PolygonPoints::Segments {
            lines: cross_bars(base_size, 5)?,
        },
        ShapeKind::FacetDiagonals => PolygonPoints::Segments {
            lines: facet_diagonals(base_size)?.to_vec(),
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shape.rs"]
mod tests;
