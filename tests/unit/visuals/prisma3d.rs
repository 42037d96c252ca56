use super::*;
use crate::composite::draw::Stroke;
use crate::foundation::core::PRISMA_WHITE;

fn mount(host: HostCapabilities) -> (Timeline, Prisma3d) {
    let mut tl = Timeline::new();
    let prism = Prisma3d::mount(Prisma3dConfig::default(), &mut tl, &host).unwrap();
    (tl, prism)
}

fn outline(layer: &LayerDraw) -> Stroke {
    match &layer.ops[0] {
        DrawOp::Polygon { stroke, .. } => *stroke,
        other => panic!("expected outline polygon, got {other:?}"),
    }
}

#[test]
fn lattice_layout_and_first_layer_emphasis() {
    let (_tl, prism) = mount(HostCapabilities::DESKTOP);
    let frame = prism.frame();
    assert_eq!(frame.layers.len(), 8);
    assert_eq!(frame.layers[0].size.0, 160.0);
    // outline + 5 bars + 3 diagonals
    assert!(frame.layers.iter().all(|l| l.ops.len() == 9));

    let first = outline(&frame.layers[0]);
    assert_eq!(first.color, PRISMA_BLUE);
    assert_eq!(first.width, 2.0);
    assert!(first.glow.is_none());
    let other = outline(&frame.layers[3]);
    assert_eq!(other.color, PRISMA_WHITE.with_alpha(0.3));

    // layer 0 sits at depth -48 and fades out completely
    assert_eq!(frame.layers[0].transform.translate_z, -48.0);
    assert_eq!(frame.layers[0].group_opacity, 0.0);
    assert_eq!(frame.layers[4].group_opacity, 1.0);
}

#[test]
fn rotation_combines_tilt_and_spin() {
    let (mut tl, mut prism) = mount(HostCapabilities::DESKTOP);
    assert_eq!(prism.rotation(), (-15.0, 25.0));
    tl.tick(15.0);
    assert!((prism.spin_deg() - 90.0).abs() < 1e-9);

    prism.pointer_move(PointerState {
        x: 0.5,
        y: 0.5,
        inside: true,
    });
    let (rx, ry) = prism.rotation();
    assert_eq!(rx, -5.0);
    assert!((ry - 125.0).abs() < 1e-9);
}

#[test]
fn hover_raises_glow_and_adds_outline_halo() {
    let (mut tl, mut prism) = mount(HostCapabilities::DESKTOP);
    assert_eq!(prism.frame().glow.map(|g| g.opacity), Some(0.3));
    prism.pointer_move(PointerState::default());
    let frame = prism.frame();
    assert_eq!(frame.glow.map(|g| g.opacity), Some(0.6));
    assert!(outline(&frame.layers[0]).glow.is_some());

    prism.pointer_leave(&mut tl).unwrap();
    assert_eq!(prism.frame().glow.map(|g| g.opacity), Some(0.3));
}

#[test]
fn leave_eases_tilt_back() {
    let (mut tl, mut prism) = mount(HostCapabilities::DESKTOP);
    prism.pointer_move(PointerState {
        x: -0.5,
        y: 0.0,
        inside: true,
    });
    prism.pointer_leave(&mut tl).unwrap();
    assert_eq!(tl.live_channels(), 3);
    tl.tick(0.5);
    let (rx, ry) = prism.rotation();
    assert_eq!(rx, -15.0);
    assert!((ry - (25.0 + prism.spin_deg())).abs() < 1e-9);
    assert_eq!(tl.live_channels(), 1);
}

#[test]
fn touch_hosts_ignore_pointer() {
    let (_tl, mut prism) = mount(HostCapabilities::TOUCH);
    prism.pointer_move(PointerState {
        x: 0.5,
        y: 0.5,
        inside: true,
    });
    assert!(!prism.is_hovering());
    assert_eq!(prism.rotation().0, -15.0);
    assert!(prism.is_animated());
}
