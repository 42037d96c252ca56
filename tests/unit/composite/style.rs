use super::*;
use crate::composite::layer::{GEOMETRIC_PRISM_FALLOFF, PRISMA3D_FALLOFF, layer_state};

#[test]
fn focal_hero_layer_is_solid_blue_with_glow() {
    let state = layer_state(12, 6, 8.0, &GEOMETRIC_PRISM_FALLOFF).unwrap();
    let style = LayerStyle::hero(&state);
    assert!(style.emphasis);
    assert_eq!(style.outline.color, PRISMA_BLUE);
    assert_eq!(style.outline.width, 2.5);
    assert!(style.outline.glow.is_some());
    assert_eq!(style.transform.translate_z, 0.0);
}

#[test]
fn outer_hero_layers_fade_through_stroke_alpha() {
    let state = layer_state(12, 0, 8.0, &GEOMETRIC_PRISM_FALLOFF).unwrap();
    let style = LayerStyle::hero(&state);
    assert!(!style.emphasis);
    assert_eq!(style.group_opacity, 1.0);
    assert_eq!(style.outline.color.a, PRISMA_WHITE.with_alpha(0.15).a);
    assert_eq!(style.inner.color.a, PRISMA_BLUE.with_alpha(0.075).a);
    assert!(style.outline.glow.is_none());
    assert!(style.rings.color.a < style.spokes.color.a);
}

#[test]
fn interactive_glow_follows_hover() {
    let state = layer_state(8, 0, 12.0, &PRISMA3D_FALLOFF).unwrap();
    assert!(InteractiveLayerStyle::interactive(&state, false).outline.glow.is_none());
    let hovered = InteractiveLayerStyle::interactive(&state, true);
    assert!(hovered.outline.glow.is_some());
    assert_eq!(hovered.group_opacity, state.opacity);

    let back = layer_state(8, 3, 12.0, &PRISMA3D_FALLOFF).unwrap();
    assert!(InteractiveLayerStyle::interactive(&back, true).outline.glow.is_none());
}
