use super::*;

#[test]
fn hex_parsing_accepts_short_long_and_alpha_forms() {
    assert_eq!(Rgba8::from_hex("#3C4FFF").unwrap(), PRISMA_BLUE);
    assert_eq!(Rgba8::from_hex("fff").unwrap(), Rgba8::rgb(255, 255, 255));
    assert_eq!(
        Rgba8::from_hex("#3c4fff80").unwrap(),
        Rgba8 {
            r: 60,
            g: 79,
            b: 255,
            a: 128
        }
    );
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}

#[test]
fn with_alpha_clamps_and_rounds() {
    assert_eq!(PRISMA_WHITE.with_alpha(0.5).a, 128);
    assert_eq!(PRISMA_WHITE.with_alpha(-3.0).a, 0);
    assert_eq!(PRISMA_WHITE.with_alpha(7.0).a, 255);
    assert_eq!(PRISMA_BLUE.to_hex_rgb(), "#3c4fff");
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    let c = Canvas::new(100, 40).unwrap();
    assert_eq!(c.center(), Point::new(50.0, 20.0));
}
