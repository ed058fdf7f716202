use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_JWKS_URL,
    DEFAULT_SCOPE_MUTATIONS, MIN_JWT_SECRET_LENGTH, ServiceCredentials,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// Shared HS256 secret. Takes precedence over provider credentials.
    pub jwt_secret: Option<String>,
    /// Pinned RS256 public key (PEM), relative to the config directory.
    /// Used when no secret is set; wins over provider credentials.
    pub jwt_public_key_path: Option<String>,
    /// Inline service credentials JSON
    pub credentials: Option<String>,
    /// Service credentials file, relative to the config directory
    pub credentials_path: Option<String>,
    /// Where the provider publishes its signing keys
    pub jwks_url: String,
    /// Restrict update and delete to the caller's own records
    pub scope_mutations: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            credentials: None,
            credentials_path: None,
            jwks_url: String::from(DEFAULT_JWKS_URL),
            scope_mutations: DEFAULT_SCOPE_MUTATIONS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if let Some(secret) = &self.jwt_secret {
            if secret.len() < MIN_JWT_SECRET_LENGTH {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            return Ok(());
        }

        if let Some(path) = &self.jwt_public_key_path {
            return check_config_file("auth.jwt_public_key_path", path, config_dir);
        }

        if self.credentials.is_none() && self.credentials_path.is_none() {
            return Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret, auth.jwt_public_key_path, \
                 auth.credentials or auth.credentials_path",
            ));
        }

        if let Some(path) = &self.credentials_path {
            check_config_file("auth.credentials_path", path, config_dir)?;
        }

        if !is_acceptable_jwks_url(&self.jwks_url) {
            return Err(ConfigError::auth(format!(
                "auth.jwks_url must use https (http only for localhost), got '{}'",
                self.jwks_url
            )));
        }

        self.load_credentials(config_dir)?;

        Ok(())
    }

    /// Read the service credentials blob, inline value first.
    pub fn load_credentials(&self, config_dir: &Path) -> ConfigErrorResult<Option<ServiceCredentials>> {
        if let Some(blob) = &self.credentials {
            return ServiceCredentials::from_json(blob).map(Some);
        }

        let Some(path) = &self.credentials_path else {
            return Ok(None);
        };

        let full_path = config_dir.join(path);
        let blob = std::fs::read_to_string(&full_path).map_err(|e| ConfigError::Io {
            path: full_path.clone(),
            source: e,
        })?;

        ServiceCredentials::from_json(&blob).map(Some)
    }

    /// Name of the verification mode, for logging
    pub fn mode(&self) -> &'static str {
        if !self.enabled {
            "disabled"
        } else if self.jwt_secret.is_some() {
            "HS256 shared secret"
        } else if self.jwt_public_key_path.is_some() {
            "RS256 pinned public key"
        } else {
            "identity provider (RS256/JWKS)"
        }
    }
}

/// `path` must stay inside the config directory and exist there
#[track_caller]
fn check_config_file(field: &str, path: &str, config_dir: &Path) -> ConfigErrorResult<()> {
    if Path::new(path).is_absolute() {
        return Err(ConfigError::auth(format!(
            "{} must be relative to the config directory",
            field
        )));
    }
    if path.contains("..") {
        return Err(ConfigError::auth(format!("{} cannot contain '..'", field)));
    }
    let full_path = config_dir.join(path);
    if !full_path.exists() {
        return Err(ConfigError::auth(format!(
            "{} {} does not exist",
            field,
            full_path.display()
        )));
    }
    Ok(())
}

fn is_acceptable_jwks_url(url: &str) -> bool {
    if url.starts_with("https://") {
        return true;
    }

    ["http://localhost", "http://127.0.0.1", "http://[::1]"]
        .iter()
        .any(|prefix| url.starts_with(prefix))
}
