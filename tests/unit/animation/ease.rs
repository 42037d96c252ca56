use super::*;

const ALL: [Ease; 11] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InQuart,
    Ease::OutQuart,
    Ease::InOutQuart,
    Ease::InOutSine,
];

#[test]
fn endpoints_are_fixed_and_input_is_clamped() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
        assert_eq!(ease.apply(-1.0), ease.apply(0.0));
        assert_eq!(ease.apply(2.0), ease.apply(1.0));
    }
}

#[test]
fn documented_midpoints() {
    let expected = [
        0.5, 0.25, 0.75, 0.5, 0.125, 0.875, 0.5, 0.0625, 0.9375, 0.5, 0.5,
    ];
    for (ease, want) in ALL.into_iter().zip(expected) {
        assert!((ease.apply(0.5) - want).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev - 1e-12, "{ease:?} at {i}");
            prev = v;
        }
    }
}

#[test]
fn tween_names_parse() {
    assert_eq!(Ease::parse("none").unwrap(), Ease::Linear);
    assert_eq!(Ease::parse("power2.inOut").unwrap(), Ease::InOutCubic);
    assert_eq!(Ease::parse("power3.out").unwrap(), Ease::OutQuart);
    assert_eq!("sine.inOut".parse::<Ease>().unwrap(), Ease::InOutSine);
    assert!(Ease::parse("elastic.out").is_err());
}
