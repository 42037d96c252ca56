use super::*;

#[test]
fn center_layer_of_twelve_is_neutral_and_focal() {
    let s = layer_state(12, 6, 8.0, &GEOMETRIC_PRISM_FALLOFF).unwrap();
    assert_eq!(s.depth_offset, 0.0);
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.opacity, 1.0);
    assert!(s.is_focal_layer);
}

#[test]
fn single_layer_stack_is_flat() {
    let s = layer_state(1, 0, 8.0, &GEOMETRIC_PRISM_FALLOFF).unwrap();
    assert_eq!(s.depth_offset, 0.0);
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.opacity, 1.0);
    assert!(s.is_focal_layer);

    let first = FalloffParams {
        focal: FocalRule::First,
        ..GEOMETRIC_PRISM_FALLOFF
    };
    assert!(layer_state(1, 0, 8.0, &first).unwrap().is_focal_layer);
}

#[test]
fn rearmost_layer_of_hero_prism() {
    let s = layer_state(12, 0, 8.0, &GEOMETRIC_PRISM_FALLOFF).unwrap();
    assert_eq!(s.depth_offset, -48.0);
    assert!((s.scale - (1.0 - 48.0 * 0.015)).abs() < 1e-12);
    assert_eq!(s.opacity, 0.15);
    assert!(!s.is_focal_layer);
}

#[test]
fn falloff_is_monotonic_in_depth() {
    for falloff in [GEOMETRIC_PRISM_FALLOFF, PRISMA3D_FALLOFF] {
        for count in 1..=16u32 {
            let spec = GeometrySpec::new(100.0, count, 8.0).unwrap();
            let stack = layer_stack(&spec, &falloff).unwrap();
            for a in &stack {
                for b in &stack {
                    if a.depth_offset.abs() < b.depth_offset.abs() {
                        assert!(a.scale >= b.scale, "{a:?} vs {b:?}");
                        assert!(a.opacity >= b.opacity, "{a:?} vs {b:?}");
                    }
                }
                assert!(a.opacity >= falloff.min_opacity);
                assert!(a.opacity <= 1.0);
                assert!(a.scale >= 0.0);
            }
        }
    }
}

#[test]
fn exactly_one_focal_layer_per_stack() {
    for rule in [FocalRule::Center, FocalRule::First, FocalRule::Fixed(0)] {
        for count in 1..=20u32 {
            let falloff = FalloffParams {
                focal: rule,
                ..GEOMETRIC_PRISM_FALLOFF
            };
            let spec = GeometrySpec::new(50.0, count, 4.0).unwrap();
            let stack = layer_stack(&spec, &falloff).unwrap();
            assert_eq!(stack.iter().filter(|l| l.is_focal_layer).count(), 1);
        }
    }
}

#[test]
fn invalid_inputs_fail_fast() {
    assert!(layer_state(0, 0, 8.0, &GEOMETRIC_PRISM_FALLOFF).is_err());
    assert!(layer_state(4, 4, 8.0, &GEOMETRIC_PRISM_FALLOFF).is_err());
    assert!(layer_state(4, 0, -1.0, &GEOMETRIC_PRISM_FALLOFF).is_err());
    let fixed = FalloffParams {
        focal: FocalRule::Fixed(9),
        ..GEOMETRIC_PRISM_FALLOFF
    };
    assert!(layer_state(4, 0, 8.0, &fixed).is_err());
    let bad_floor = FalloffParams {
        min_opacity: 1.5,
        ..GEOMETRIC_PRISM_FALLOFF
    };
    assert!(layer_state(4, 0, 8.0, &bad_floor).is_err());
    assert!(GeometrySpec::new(0.0, 4, 8.0).is_err());
    assert!(GeometrySpec::new(10.0, 0, 8.0).is_err());
}

#[test]
fn interactive_prism_opacity_bottoms_out_at_zero() {
    let s = layer_state(8, 0, 12.0, &PRISMA3D_FALLOFF).unwrap();
    assert_eq!(s.depth_offset, -48.0);
    assert_eq!(s.opacity, 0.0);
    assert!((s.scale - 0.616).abs() < 1e-12);
    assert!(s.is_focal_layer);
}
