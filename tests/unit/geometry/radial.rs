use super::*;
use crate::foundation::math::approx_eq;

#[test]
fn first_spoke_points_up() {
    let spokes = radial_spokes(100.0, &SpokeParams::default()).unwrap();
    assert_eq!(spokes.len(), 6);
    let first = spokes[0];
    assert!(approx_eq(first.p0.x, 50.0));
    assert!(approx_eq(first.p0.y, 43.3 - 15.0));
    assert!(approx_eq(first.p1.x, 50.0));
    assert!(approx_eq(first.p1.y, 43.3 - 35.0));
}

#[test]
fn spokes_are_evenly_spaced() {
    let params = SpokeParams {
        count: 4,
        phase_deg: 0.0,
        ..SpokeParams::default()
    };
    let spokes = radial_spokes(100.0, &params).unwrap();
    let c = Point::new(50.0, 43.3);
    let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
    for (line, (dx, dy)) in spokes.iter().zip(expected) {
        assert!(approx_eq(line.p1.x, c.x + dx * 35.0), "{line:?}");
        assert!(approx_eq(line.p1.y, c.y + dy * 35.0), "{line:?}");
    }
}

#[test]
fn rings_follow_arithmetic_progression() {
    let rings = concentric_rings(200.0, &RingParams::default()).unwrap();
    let radii: Vec<f64> = rings.iter().map(|c| c.radius).collect();
    assert_eq!(radii.len(), 3);
    assert!(approx_eq(radii[0], 20.0));
    assert!(approx_eq(radii[1], 36.0));
    assert!(approx_eq(radii[2], 52.0));
    for ring in &rings {
        assert!(approx_eq(ring.center.x, 100.0));
        assert!(approx_eq(ring.center.y, 86.6));
    }
}

#[test]
fn zero_counts_are_rejected() {
    let spokes = SpokeParams {
        count: 0,
        ..SpokeParams::default()
    };
    assert!(radial_spokes(100.0, &spokes).is_err());
    let rings = RingParams {
        count: 0,
        ..RingParams::default()
    };
    assert!(concentric_rings(100.0, &rings).is_err());
    assert!(concentric_rings(-5.0, &RingParams::default()).is_err());
}
