use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PrismaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PrismaError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        PrismaError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        PrismaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PrismaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn out_of_range_names_the_parameter() {
    let err = PrismaError::out_of_range("layer_spacing", -2.0, ">= 0");
    assert_eq!(err.param(), Some("layer_spacing"));
    assert_eq!(
        err.to_string(),
        "validation error: layer_spacing must be finite and >= 0 (got -2)"
    );
    assert_eq!(PrismaError::validation("x").param(), None);
}
