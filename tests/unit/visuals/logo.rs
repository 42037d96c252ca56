use super::*;

#[test]
fn geometry_scales_with_size() {
    let mut tl = Timeline::new();
    let logo = PrismaLogo::mount(LogoConfig::default(), &mut tl, &HostCapabilities::DESKTOP)
        .unwrap();
    let layer = logo.layer();
    assert_eq!(layer.ops.len(), 6);

    let radii: Vec<f64> = layer
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Circle { circle, .. } => Some(circle.radius),
            _ => None,
        })
        .collect();
    let r = 120.0 * 0.35;
    let want = [r * 1.3, r * 1.15, r * 0.85];
    for (got, want) in radii.iter().zip(want) {
        assert!((got - want).abs() < 1e-9);
    }

    match &layer.ops[3] {
        DrawOp::Polygon { points, .. } => {
            assert_eq!(points[0], Point::new(60.0, 60.0 - r));
        }
        other => panic!("expected triangle, got {other:?}"),
    }
    assert!(matches!(layer.ops[5], DrawOp::Dot { radius, .. } if radius == 2.0));
}

#[test]
fn orbits_spin_at_their_own_rates() {
    let mut tl = Timeline::new();
    let logo = PrismaLogo::mount(LogoConfig::default(), &mut tl, &HostCapabilities::DESKTOP)
        .unwrap();
    assert_eq!(tl.live_channels(), 4);
    tl.tick(5.0);
    let [outer, middle, inner] = logo.orbit_rotations();
    assert!((outer - 90.0).abs() < 1e-9);
    assert!((middle + 120.0).abs() < 1e-9);
    assert!((inner - 72.0).abs() < 1e-9);
}

#[test]
fn triangle_pulses_between_full_and_sixty_percent() {
    let mut tl = Timeline::new();
    let logo = PrismaLogo::mount(LogoConfig::default(), &mut tl, &HostCapabilities::DESKTOP)
        .unwrap();
    assert_eq!(logo.triangle_opacity(), 1.0);
    tl.tick(2.0);
    assert!((logo.triangle_opacity() - 0.6).abs() < 1e-9);
    tl.tick(2.0);
    assert!((logo.triangle_opacity() - 1.0).abs() < 1e-9);
}

#[test]
fn static_logo_has_no_channels() {
    let mut tl = Timeline::new();
    let logo = PrismaLogo::mount(
        LogoConfig {
            size: 32.0,
            animated: false,
        },
        &mut tl,
        &HostCapabilities::DESKTOP,
    )
    .unwrap();
    assert!(!logo.is_animated());
    assert!(tl.is_idle());
    tl.tick(3.0);
    assert_eq!(logo.orbit_rotations(), [0.0; 3]);
    assert_eq!(logo.triangle_opacity(), 1.0);
}

#[test]
fn non_positive_size_is_rejected() {
    let mut tl = Timeline::new();
    let cfg = LogoConfig {
        size: -1.0,
        animated: true,
    };
    assert!(PrismaLogo::mount(cfg, &mut tl, &HostCapabilities::DESKTOP).is_err());
}
