use people_core::Person;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Person as it appears on the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Person> for PersonDto {
    fn from(p: Person) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            image: p.image,
            title: p.title,
            uid: p.uid,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
