use crate::{ConfigError, ConfigErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Identity-provider service account blob.
///
/// Only `project_id` is needed to verify ID tokens; the remaining fields are
/// kept so the summary log can say which account is in use.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceCredentials {
    pub project_id: String,
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub private_key_id: Option<String>,
}

impl ServiceCredentials {
    #[track_caller]
    pub fn from_json(blob: &str) -> ConfigErrorResult<Self> {
        let credentials: ServiceCredentials =
            serde_json::from_str(blob).map_err(|source| ConfigError::Credentials {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if credentials.project_id.trim().is_empty() {
            return Err(ConfigError::auth("credentials project_id cannot be empty"));
        }

        Ok(credentials)
    }
}
