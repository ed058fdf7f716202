use crate::PersonDto;

use people_core::{Person, PersonPatch};

fn patch() -> PersonPatch {
    PersonPatch {
        name: Some(Some("Ada".into())),
        image: None,
        title: Some(Some("Countess".into())),
    }
}

#[test]
fn test_dto_uses_camel_case_timestamps() {
    let person = Person::new(patch(), Some("owner-1".into()));

    let json = serde_json::to_value(PersonDto::from(person.clone())).unwrap();

    assert_eq!(json["id"], person.id.to_string());
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["uid"], "owner-1");
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
    assert!(json.get("created_at").is_none());
}

#[test]
fn test_dto_omits_missing_owner() {
    let person = Person::new(patch(), None);

    let json = serde_json::to_value(PersonDto::from(person)).unwrap();

    assert!(json.get("uid").is_none());
    assert!(json["image"].is_null());
}
