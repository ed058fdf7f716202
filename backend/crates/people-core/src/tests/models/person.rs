use crate::{CoreError, Person, PersonPatch};

fn patch(name: Option<&str>, title: Option<&str>) -> PersonPatch {
    PersonPatch {
        name: name.map(|n| Some(n.to_string())),
        image: None,
        title: title.map(|t| Some(t.to_string())),
    }
}

#[test]
fn test_person_new_generates_id_and_timestamps() {
    let a = Person::new(patch(Some("Ada"), None), None);
    let b = Person::new(patch(Some("Ada"), None), None);

    assert_ne!(a.id, b.id);
    assert_eq!(a.created_at, a.updated_at);
    assert_eq!(a.name.as_deref(), Some("Ada"));
    assert!(a.uid.is_none());
}

#[test]
fn test_person_new_sets_owner() {
    let person = Person::new(PersonPatch::default(), Some("user-1".to_string()));

    assert_eq!(person.uid.as_deref(), Some("user-1"));
}

#[test]
fn test_new_treats_null_fields_as_unset() {
    let fields = PersonPatch {
        name: Some(Some("Ada".to_string())),
        title: Some(None),
        ..Default::default()
    };

    let person = Person::new(fields, None);

    assert_eq!(person.name.as_deref(), Some("Ada"));
    assert!(person.title.is_none());
}

#[test]
fn test_parse_id_rejects_garbage() {
    let result = Person::parse_id("not-an-id");

    assert!(matches!(result, Err(CoreError::Uuid { .. })));
}

#[test]
fn test_parse_id_round_trips_generated_id() {
    let person = Person::new(PersonPatch::default(), None);

    let parsed = Person::parse_id(&person.id.to_string()).unwrap();

    assert_eq!(parsed, person.id);
}
