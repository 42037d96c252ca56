use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn progress_midpoint_linear_and_eased() {
    let linear = ChannelSpec::new("progress", 0.0, 100.0, 2500.0);
    assert!(close(linear.sample(1250.0).value, 50.0));

    let eased = linear.clone().ease(Ease::InOutCubic);
    assert!(close(eased.sample(1250.0).value, 50.0));
    assert!(close(eased.sample(625.0).value, 100.0 * 4.0 * 0.25f64.powi(3)));
}

#[test]
fn one_shot_clamps_and_finishes() {
    let c = ChannelSpec::new("fade", 1.0, 0.0, 0.6);
    assert!(!c.sample(0.3).finished);
    let end = c.sample(0.6);
    assert!(end.finished);
    assert_eq!(end.value, 0.0);
    assert_eq!(c.sample(10.0).value, 0.0);
}

#[test]
fn loop_is_periodic() {
    let c = ChannelSpec::new("rotation_y", 0.0, 360.0, 40.0).repeat(RepeatMode::Loop);
    for i in 0..40 {
        let t = f64::from(i) * 0.97;
        assert!(close(c.sample(t).value, c.sample(t + 40.0).value));
        assert!(close(c.sample(t).value, c.sample(t + 120.0).value));
        assert!(!c.sample(t).finished);
    }
}

#[test]
fn ping_pong_mirrors_around_duration() {
    let c = ChannelSpec::new("float_y", 0.0, -15.0, 4.0)
        .repeat(RepeatMode::PingPong)
        .ease(Ease::InOutSine);
    for i in 0..=40 {
        let t = f64::from(i) * 0.1;
        assert!(close(c.sample(4.0 + t).value, c.sample(4.0 - t).value), "t={t}");
    }
    assert!(close(c.sample(4.0).value, -15.0));
    assert!(close(c.sample(8.0).value, 0.0));
}

#[test]
fn delay_holds_from() {
    let c = ChannelSpec::new("reveal", 0.0, 1.0, 1.0).delay(0.5);
    assert_eq!(c.sample(0.25).value, 0.0);
    assert!(close(c.sample(1.0).value, 0.5));
    assert!(c.sample(1.5).finished);
}

#[test]
fn validation_rejects_bad_specs() {
    assert!(ChannelSpec::new("x", 0.0, 1.0, 0.0).validate().is_err());
    assert!(ChannelSpec::new("x", 0.0, 1.0, -1.0).validate().is_err());
    assert!(ChannelSpec::new("x", f64::NAN, 1.0, 1.0).validate().is_err());
    assert!(ChannelSpec::new("x", 0.0, 1.0, 1.0).delay(-0.1).validate().is_err());
    assert!(ChannelSpec::new("x", 0.0, 1.0, 1.0).validate().is_ok());
}
