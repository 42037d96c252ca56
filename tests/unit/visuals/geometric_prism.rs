use super::*;

#[test]
fn default_stack_matches_hero_layout() {
    let mut tl = Timeline::new();
    let prism = GeometricPrism::mount(
        GeometricPrismConfig::default(),
        &mut tl,
        &HostCapabilities::DESKTOP,
    )
    .unwrap();
    let frame = prism.frame();
    assert_eq!(frame.kind, VisualKind::GeometricPrism);
    assert_eq!(frame.size, (300.0, 300.0));
    assert_eq!(frame.layers.len(), 12);

    let focal: Vec<_> = frame
        .layers
        .iter()
        .filter(|l| l.state.is_focal_layer)
        .collect();
    assert_eq!(focal.len(), 1);
    assert_eq!(focal[0].state.index, 6);
    assert_eq!(focal[0].transform.translate_z, 0.0);

    // outer + inner + 6 spokes + 3 rings
    assert!(frame.layers.iter().all(|l| l.ops.len() == 11));
    assert_eq!(frame.layers[0].size.0, 150.0);
    assert_eq!(frame.faces.len(), 2);
    assert_eq!(frame.faces[0].translate_z, -48.0);
}

#[test]
fn spin_and_float_follow_the_timeline() {
    let mut tl = Timeline::new();
    let prism = GeometricPrism::mount(
        GeometricPrismConfig::default(),
        &mut tl,
        &HostCapabilities::DESKTOP,
    )
    .unwrap();
    assert!(prism.is_animated());
    assert_eq!(tl.live_channels(), 2);

    tl.tick(4.0);
    assert!((prism.rotation_y() - 36.0).abs() < 1e-9);
    assert!((prism.float_y() + 15.0).abs() < 1e-9);
    tl.tick(4.0);
    assert!(prism.float_y().abs() < 1e-9);

    let pose = prism.frame().pose;
    assert!((pose.rotate_y_deg - 72.0).abs() < 1e-9);
}

#[test]
fn reduced_motion_and_static_config_mount_without_channels() {
    let mut tl = Timeline::new();
    let reduced = HostCapabilities::DESKTOP.with_reduced_motion(true);
    let prism = GeometricPrism::mount(GeometricPrismConfig::default(), &mut tl, &reduced).unwrap();
    assert!(!prism.is_animated());
    assert!(tl.is_idle());

    let still = GeometricPrismConfig {
        animated: false,
        ..GeometricPrismConfig::default()
    };
    let prism = GeometricPrism::mount(still, &mut tl, &HostCapabilities::DESKTOP).unwrap();
    tl.tick(10.0);
    assert_eq!(prism.frame().pose, StackPose::default());
}

#[test]
fn dropping_releases_channels() {
    let mut tl = Timeline::new();
    let prism = GeometricPrism::mount(
        GeometricPrismConfig::default(),
        &mut tl,
        &HostCapabilities::DESKTOP,
    )
    .unwrap();
    drop(prism);
    assert!(tl.is_idle());
}

#[test]
fn invalid_size_fails_fast() {
    let mut tl = Timeline::new();
    let bad = GeometricPrismConfig {
        size: 0.0,
        ..GeometricPrismConfig::default()
    };
    assert!(GeometricPrism::mount(bad, &mut tl, &HostCapabilities::DESKTOP).is_err());
    assert!(tl.is_idle());
}
