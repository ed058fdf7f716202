use crate::{CoreError, MAX_FIELD_LENGTH, PersonPatch};

#[test]
fn test_patch_ignores_server_owned_fields() {
    let json = r#"{"id":"abc","uid":"attacker","name":"Grace","createdAt":"2020-01-01T00:00:00Z"}"#;

    let patch: PersonPatch = serde_json::from_str(json).unwrap();

    assert_eq!(patch.name, Some(Some("Grace".to_string())));
    assert!(patch.title.is_none());
    assert!(patch.image.is_none());
}

#[test]
fn test_empty_patch() {
    let patch: PersonPatch = serde_json::from_str("{}").unwrap();

    assert_eq!(patch, PersonPatch::default());
    assert!(patch.validate().is_ok());
}

#[test]
fn test_explicit_null_is_distinct_from_absent() {
    let patch: PersonPatch = serde_json::from_str(r#"{"title":null,"name":"Ada"}"#).unwrap();

    assert_eq!(patch.title, Some(None));
    assert_eq!(patch.name, Some(Some("Ada".to_string())));
    assert_eq!(patch.image, None);
}

#[test]
fn test_null_field_passes_validation() {
    let patch: PersonPatch = serde_json::from_str(r#"{"image":null}"#).unwrap();

    assert!(patch.validate().is_ok());
}

#[test]
fn test_validate_rejects_oversized_field() {
    let patch = PersonPatch {
        title: Some(Some("x".repeat(MAX_FIELD_LENGTH + 1))),
        ..Default::default()
    };

    match patch.validate() {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field, "title"),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_validate_accepts_field_at_limit() {
    let patch = PersonPatch {
        image: Some(Some("x".repeat(MAX_FIELD_LENGTH))),
        ..Default::default()
    };

    assert!(patch.validate().is_ok());
}
