//! Person entity - the single resource exposed by the API.

use crate::{CoreError, PersonPatch, Result as CoreResult};

use std::panic::Location;

use chrono::{DateTime, SubsecRound, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person record.
///
/// `uid` is the owning subject. It is only populated when the record was
/// created by an authenticated caller and is never taken from client input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
    pub uid: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Create a new person from client-supplied fields.
    ///
    /// The id and both timestamps are generated here; `owner` overrides
    /// whatever the client may have sent.
    pub fn new(fields: PersonPatch, owner: Option<String>) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4(),
            name: fields.name.flatten(),
            image: fields.image.flatten(),
            title: fields.title.flatten(),
            uid: owner,
            created_at: now,
            updated_at: now,
        }
    }

    /// Parse an opaque person id as supplied in a request path.
    #[track_caller]
    pub fn parse_id(raw: &str) -> CoreResult<Uuid> {
        Uuid::parse_str(raw).map_err(|source| CoreError::Uuid {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Storage keeps millisecond precision; so do we.
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
