use crate::error::{Result as ServerErrorResult, ServerError};

use people_auth::{IdentityVerifier, JwksVerifier, JwtValidator, ProviderSettings};
use people_config::AuthConfig;

use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};

/// Pick the identity verifier the auth config asks for.
///
/// Returns `None` when auth is disabled. Precedence: shared secret, then
/// pinned public key, then provider credentials.
#[track_caller]
pub fn build_verifier(
    auth: &AuthConfig,
    config_dir: &Path,
) -> ServerErrorResult<Option<Arc<dyn IdentityVerifier>>> {
    let location = Location::caller();

    if !auth.enabled {
        warn!("Authentication DISABLED - every request is anonymous");
        return Ok(None);
    }

    let verifier: Arc<dyn IdentityVerifier> = if let Some(ref secret) = auth.jwt_secret {
        Arc::new(JwtValidator::with_hs256(secret.as_bytes()))
    } else if let Some(ref key_path) = auth.jwt_public_key_path {
        let full_path = config_dir.join(key_path);
        let public_key =
            std::fs::read_to_string(&full_path).map_err(|e| ServerError::KeyFile {
                path: full_path.clone(),
                source: e,
                location: ErrorLocation::from(location),
            })?;
        Arc::new(JwtValidator::with_rs256(&public_key)?)
    } else {
        let credentials = auth
            .load_credentials(config_dir)?
            .ok_or_else(|| ServerError::AuthSetup {
                message: "auth.enabled without a secret, public key or service credentials"
                    .to_string(),
                location: ErrorLocation::from(location),
            })?;
        if let Some(ref email) = credentials.client_email {
            info!("Auth: service account {}", email);
        }

        Arc::new(JwksVerifier::new(ProviderSettings {
            project_id: credentials.project_id,
            jwks_url: auth.jwks_url.clone(),
        })?)
    };

    info!("Auth: {}", verifier.describe());
    Ok(Some(verifier))
}
