use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn mount(host: HostCapabilities) -> (Timeline, LoadingScreen, Rc<Cell<u32>>) {
    let mut tl = Timeline::new();
    let fired = Rc::new(Cell::new(0));
    let f = Rc::clone(&fired);
    let loader = LoadingScreen::mount(LoaderConfig::default(), &mut tl, &host, move || {
        f.set(f.get() + 1)
    })
    .unwrap();
    (tl, loader, fired)
}

#[test]
fn starts_empty_with_full_dash_offset() {
    let (_tl, loader, fired) = mount(HostCapabilities::DESKTOP);
    assert_eq!(loader.phase(), LoaderPhase::Progress);
    assert_eq!(loader.progress(), 0.0);
    assert_eq!(loader.label(), "000%");
    assert!((loader.dash_offset() - RING_CIRCUMFERENCE).abs() < 1e-9);
    assert_eq!(loader.opacity(), 1.0);
    assert_eq!(fired.get(), 0);
}

#[test]
fn halfway_is_fifty_percent_with_half_dash_offset() {
    let (mut tl, loader, _) = mount(HostCapabilities::DESKTOP);
    tl.tick(1.25);
    assert!((loader.progress() - 50.0).abs() < 1e-9);
    assert_eq!(loader.label(), "050%");
    assert!((loader.dash_offset() - RING_CIRCUMFERENCE / 2.0).abs() < 1e-9);
}

#[test]
fn phases_advance_and_completion_fires_once() {
    let (mut tl, loader, fired) = mount(HostCapabilities::DESKTOP);
    tl.tick(2.5);
    assert_eq!(loader.phase(), LoaderPhase::FadingOut);
    assert_eq!(loader.label(), "100%");
    assert_eq!(loader.dash_offset(), 0.0);
    assert_eq!(fired.get(), 0);

    tl.tick(0.3);
    let mid = loader.opacity();
    assert!(mid > 0.0 && mid < 1.0);

    tl.tick(0.4);
    assert_eq!(loader.phase(), LoaderPhase::Done);
    assert_eq!(loader.opacity(), 0.0);
    assert_eq!(fired.get(), 1);

    for _ in 0..10 {
        tl.tick(1.0);
    }
    assert_eq!(fired.get(), 1);
    assert!(!loader.is_animated());
}

#[test]
fn frame_carries_logo_ring_and_label() {
    let (mut tl, loader, _) = mount(HostCapabilities::DESKTOP);
    tl.tick(1.0);
    let frame = loader.frame();
    assert_eq!(frame.layers.len(), 2);
    let ring = &frame.layers[1];
    assert!((ring.transform.scale - 1.32).abs() < 1e-12);
    match &ring.ops[1] {
        DrawOp::Circle {
            stroke,
            rotation_deg,
            ..
        } => {
            assert_eq!(*rotation_deg, -90.0);
            assert!((stroke.dash_offset - loader.dash_offset()).abs() < 1e-12);
        }
        other => panic!("expected progress ring, got {other:?}"),
    }
    assert!(matches!(&ring.ops[2], DrawOp::Label { text, .. } if *text == loader.label()));
}

#[test]
fn reduced_motion_skips_loader() {
    let (tl, loader, fired) = mount(HostCapabilities::DESKTOP.with_reduced_motion(true));
    assert_eq!(fired.get(), 1);
    assert_eq!(loader.phase(), LoaderPhase::Done);
    assert_eq!(loader.opacity(), 0.0);
    assert!(tl.is_idle());
}

#[test]
fn unmount_before_completion_never_fires() {
    let (mut tl, loader, fired) = mount(HostCapabilities::DESKTOP);
    tl.tick(1.0);
    drop(loader);
    for _ in 0..10 {
        tl.tick(1.0);
    }
    assert_eq!(fired.get(), 0);
    assert!(tl.is_idle());
}
