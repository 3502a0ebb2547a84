use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MockupError::not_found("screenshot", "/tmp/x.png")
            .to_string()
            .contains("not found:")
    );
    assert!(
        MockupError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MockupError::font("x").to_string().contains("font error:"));
    assert!(
        MockupError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn not_found_names_role_and_path() {
    let err = MockupError::not_found("base mockup", "assets/Start.png");
    let msg = err.to_string();
    assert!(msg.contains("base mockup"));
    assert!(msg.contains("Start.png"));
    assert_eq!(err.missing_path(), Some(Path::new("assets/Start.png")));
}

#[test]
fn missing_path_is_none_for_other_variants() {
    assert!(MockupError::validation("x").missing_path().is_none());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MockupError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
