use super::*;

#[test]
fn untriggered_reveal_plays_with_stagger() {
    let mut tl = Timeline::new();
    let reveal = Reveal::mount("hero", RevealPreset::HERO_LINES, 3, false, &mut tl).unwrap();
    assert_eq!(tl.live_channels(), 3);
    assert_eq!(reveal.item(0).opacity, 0.0);
    assert_eq!(reveal.item(0).y, 100.0);

    // After 0.6 s only the first line has started (delay 0.5, stagger 0.1).
    tl.tick(0.6);
    assert!(reveal.progress(0) > 0.0);
    assert!(reveal.progress(1).abs() < 1e-12);
    assert!(reveal.progress(2).abs() < 1e-12);

    for _ in 0..30 {
        tl.tick(0.1);
    }
    assert!(reveal.is_settled());
    let done = reveal.item(2);
    assert_eq!(done.y, 0.0);
    assert_eq!(done.opacity, 1.0);
    assert!(tl.is_idle());
}

#[test]
fn scroll_trigger_plays_then_reverses() {
    let mut tl = Timeline::new();
    let mut reveal = Reveal::mount("about", RevealPreset::SECTION, 2, false, &mut tl).unwrap();
    assert!(tl.is_idle());

    // Below the 60% line: nothing happens.
    assert_eq!(reveal.on_scroll(900.0, 1000.0, &mut tl).unwrap(), None);
    assert_eq!(
        reveal.on_scroll(550.0, 1000.0, &mut tl).unwrap(),
        Some(TriggerEvent::Enter)
    );
    assert_eq!(reveal.on_scroll(100.0, 1000.0, &mut tl).unwrap(), None);
    for _ in 0..20 {
        tl.tick(0.1);
    }
    assert!(reveal.is_settled());

    assert_eq!(
        reveal.on_scroll(700.0, 1000.0, &mut tl).unwrap(),
        Some(TriggerEvent::LeaveBack)
    );
    for _ in 0..20 {
        tl.tick(0.1);
    }
    assert_eq!(reveal.item(0).opacity, 0.0);
    assert_eq!(reveal.item(1).y, 60.0);
}

#[test]
fn reverse_mid_flight_starts_from_current_progress() {
    let mut tl = Timeline::new();
    let mut reveal = Reveal::mount("cta", RevealPreset::CTA, 1, false, &mut tl).unwrap();
    reveal.on_scroll(0.0, 1000.0, &mut tl).unwrap();
    tl.tick(0.5);
    let mid = reveal.progress(0);
    assert!(mid > 0.0 && mid < 1.0);

    reveal.on_scroll(900.0, 1000.0, &mut tl).unwrap();
    assert!((reveal.progress(0) - mid).abs() < 1e-12);
    tl.tick(0.01);
    assert!(reveal.progress(0) < mid);
    assert_eq!(tl.live_channels(), 1);
}

#[test]
fn reduced_motion_rests_at_end_state() {
    let mut tl = Timeline::new();
    let mut reveal = Reveal::mount("cards", RevealPreset::CARDS, 4, true, &mut tl).unwrap();
    assert!(tl.is_idle());
    assert!(reveal.is_settled());
    assert_eq!(reveal.on_scroll(0.0, 1000.0, &mut tl).unwrap(), None);
    assert_eq!(reveal.item(3).scale, 1.0);
}

#[test]
fn dropping_reveal_releases_channels() {
    let mut tl = Timeline::new();
    let reveal = Reveal::mount("page", RevealPreset::PAGE_TRANSITION, 1, false, &mut tl).unwrap();
    assert_eq!(tl.live_channels(), 1);
    drop(reveal);
    assert!(tl.is_idle());
}

#[test]
fn invalid_trigger_is_rejected() {
    let mut tl = Timeline::new();
    let preset = RevealPreset {
        trigger: Some(ScrollTrigger::at(1.5)),
        ..RevealPreset::CTA
    };
    assert!(Reveal::mount("x", preset, 1, false, &mut tl).is_err());
}
