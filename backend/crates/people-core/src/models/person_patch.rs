use crate::{CoreError, MAX_FIELD_LENGTH, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize};

/// Client-writable subset of a person. Used for both create and update.
///
/// Each field is tri-state: absent (`None`), explicit `null` (`Some(None)`)
/// or a value (`Some(Some(_))`). On update an absent field keeps the stored
/// value and `null` clears it.
///
/// Anything else in the request body (`id`, `uid`, timestamps) is dropped
/// during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
}

/// Only runs when the key is in the payload, so `null` becomes `Some(None)`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl PersonPatch {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        let location = Location::caller();
        for (field, value) in [
            ("name", &self.name),
            ("image", &self.image),
            ("title", &self.title),
        ] {
            if let Some(Some(value)) = value
                && value.len() > MAX_FIELD_LENGTH
            {
                return Err(CoreError::Validation {
                    field: field.to_string(),
                    message: format!("{} exceeds {} bytes", field, MAX_FIELD_LENGTH),
                    location: ErrorLocation::from(location),
                });
            }
        }
        Ok(())
    }
}
