use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollfadeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollfadeError::precondition("x")
            .to_string()
            .contains("precondition violated:")
    );
    assert!(
        ScrollfadeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollfadeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: ScrollfadeError = serde_json::from_str::<u32>("not json").unwrap_err().into();
    assert!(matches!(err, ScrollfadeError::Serde(_)));
}
