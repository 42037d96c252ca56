use super::*;
use crate::composite::draw::LayerTransform;
use crate::composite::layer::LayerState;
use crate::foundation::core::PRISMA_BLUE;
use crate::foundation::math::approx_eq;
use crate::visuals::frame::{VisualKind, PERSPECTIVE};

fn layer(translate_z: f64, scale: f64) -> LayerDraw {
    LayerDraw {
        state: LayerState {
            index: 0,
            depth_offset: translate_z,
            scale,
            opacity: 1.0,
            is_focal_layer: false,
        },
        transform: LayerTransform { translate_z, scale },
        group_opacity: 1.0,
        size: (100.0, 80.0),
        ops: Vec::new(),
    }
}

fn frame(perspective: Option<f64>, pose: StackPose) -> VisualFrame {
    VisualFrame {
        kind: VisualKind::GeometricPrism,
        size: (200.0, 200.0),
        perspective,
        pose,
        opacity: 1.0,
        layers: vec![layer(0.0, 1.0)],
        faces: Vec::new(),
        glow: None,
    }
}

fn canvas() -> Canvas {
    Canvas::new(400, 400).unwrap()
}

#[test]
fn flat_frame_is_centred_and_fit_to_canvas() {
    let p = Projector::new(&frame(None, StackPose::default()), canvas());
    assert_eq!(p.fit(), 2.0);

    let l = layer(0.0, 1.0);
    let centre = p.layer_point(&l, Point::new(50.0, 40.0));
    assert_eq!(centre.point, Point::new(200.0, 200.0));
    let corner = p.layer_point(&l, Point::ZERO);
    assert_eq!(corner.point, Point::new(100.0, 120.0));
    assert_eq!(corner.scale, 2.0);
}

#[test]
fn layer_scale_shrinks_about_its_centre() {
    let p = Projector::new(&frame(None, StackPose::default()), canvas());
    let half = layer(0.0, 0.5);
    let corner = p.layer_point(&half, Point::ZERO);
    assert_eq!(corner.point, Point::new(150.0, 160.0));
    assert_eq!(corner.scale, 1.0);
}

#[test]
fn perspective_enlarges_nearer_layers() {
    let p = Projector::new(&frame(Some(PERSPECTIVE), StackPose::default()), canvas());
    let near = p.layer_point(&layer(100.0, 1.0), Point::ZERO);
    let far = p.layer_point(&layer(-100.0, 1.0), Point::ZERO);
    let flat = p.layer_point(&layer(0.0, 1.0), Point::ZERO);
    assert!(near.scale > flat.scale && flat.scale > far.scale);
    assert!(approx_eq(flat.scale, 2.0));
    assert!(near.depth > far.depth);
}

#[test]
fn quarter_turn_collapses_horizontal_extent() {
    let pose = StackPose {
        rotate_y_deg: 90.0,
        ..StackPose::default()
    };
    let p = Projector::new(&frame(None, pose), canvas());
    let l = layer(0.0, 1.0);
    let left = p.layer_point(&l, Point::new(0.0, 40.0));
    let right = p.layer_point(&l, Point::new(100.0, 40.0));
    assert!(approx_eq(left.point.x, right.point.x));
    assert!(left.depth > right.depth);
}

#[test]
fn rotation_reorders_layer_depths() {
    let front = layer(50.0, 1.0);
    let back = layer(-50.0, 1.0);
    let upright = Projector::new(&frame(None, StackPose::default()), canvas());
    assert!(upright.layer_depth(&front) > upright.layer_depth(&back));

    let flipped = Projector::new(
        &frame(
            None,
            StackPose {
                rotate_y_deg: 180.0,
                ..StackPose::default()
            },
        ),
        canvas(),
    );
    assert!(flipped.layer_depth(&front) < flipped.layer_depth(&back));
}

#[test]
fn translate_y_moves_the_whole_stack() {
    let pose = StackPose {
        translate_y: -15.0,
        ..StackPose::default()
    };
    let p = Projector::new(&frame(None, pose), canvas());
    let c = p.layer_point(&layer(0.0, 1.0), Point::new(50.0, 40.0));
    assert_eq!(c.point, Point::new(200.0, 170.0));
}

#[test]
fn faces_fold_about_their_hinge() {
    let p = Projector::new(&frame(None, StackPose::default()), canvas());
    let face = SideFace {
        hinge: FaceHinge::Left,
        rotate_y_deg: -60.0,
        translate_z: 0.0,
        points: [Point::new(50.0, 0.0), Point::new(0.0, 80.0), Point::new(100.0, 80.0)],
        tint: PRISMA_BLUE,
    };
    let hinge = p.face_point(&face, (100.0, 80.0), Point::new(0.0, 80.0));
    assert!(approx_eq(hinge.point.x, 100.0));
    let tip = p.face_point(&face, (100.0, 80.0), Point::new(100.0, 80.0));
    // cos(60°) foreshortening of the full width
    assert!(approx_eq(tip.point.x, 200.0));
}
