use super::*;
use crate::animation::timeline::Timeline;
use crate::interaction::host::HostCapabilities;
use crate::visuals::frame::Visual;
use crate::visuals::geometric_prism::{GeometricPrism, GeometricPrismConfig};
use crate::visuals::loader::{LoaderConfig, LoadingScreen};

fn prism_frame() -> VisualFrame {
    let mut tl = Timeline::new();
    GeometricPrism::mount(
        GeometricPrismConfig::default(),
        &mut tl,
        &HostCapabilities::DESKTOP,
    )
    .unwrap()
    .frame()
}

#[test]
fn prism_document_has_one_group_per_layer() {
    let frame = prism_frame();
    let svg = frame_to_svg(&frame, &SvgOptions::default()).unwrap();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    // frame group + one per layer
    assert_eq!(svg.matches("<g opacity=").count(), frame.layers.len() + 1);
    assert_eq!(svg.matches("<linearGradient").count(), 2);
    assert!(svg.contains("feGaussianBlur"));
    assert!(svg.contains("stroke-dasharray"));
    assert!(svg.contains("<rect"));
}

#[test]
fn output_is_deterministic() {
    let frame = prism_frame();
    let a = frame_to_svg(&frame, &SvgOptions::default()).unwrap();
    let b = frame_to_svg(&frame, &SvgOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn transparent_background_omits_rect() {
    let opts = SvgOptions {
        background: None,
        ..SvgOptions::default()
    };
    let svg = frame_to_svg(&prism_frame(), &opts).unwrap();
    assert!(!svg.contains("<rect"));
}

#[test]
fn loader_document_carries_progress_label() {
    let mut tl = Timeline::new();
    let loader = LoadingScreen::mount(
        LoaderConfig::default(),
        &mut tl,
        &HostCapabilities::DESKTOP,
        || {},
    )
    .unwrap();
    let svg = frame_to_svg(&loader.frame(), &SvgOptions::default()).unwrap();
    assert!(svg.contains(">000%</text>"));
    assert!(svg.contains("stroke-dashoffset"));
}

#[test]
fn rejects_degenerate_frames_and_options() {
    let mut frame = prism_frame();
    let opts = SvgOptions {
        circle_segments: 4,
        ..SvgOptions::default()
    };
    assert!(matches!(
        frame_to_svg(&frame, &opts),
        Err(PrismaError::Render(_))
    ));

    frame.size = (0.0, 300.0);
    assert!(frame_to_svg(&frame, &SvgOptions::default()).is_err());
    frame.size = (f64::NAN, 300.0);
    assert!(frame_to_svg(&frame, &SvgOptions::default()).is_err());
}

#[test]
fn numbers_are_trimmed_and_finite() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(0.12345), "0.123");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(f64::INFINITY), "0");
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape_text("a<b & c>"), "a&lt;b &amp; c&gt;");
}

#[test]
fn path_data_closes_polygons_only() {
    let pts = [Point::new(0.0, 0.0), Point::new(1.5, 2.0)];
    assert_eq!(path_data(&pts, false), "M0 0 L1.5 2");
    assert_eq!(path_data(&pts, true), "M0 0 L1.5 2 Z");
    assert_eq!(path_data(&[], true), "");
}
