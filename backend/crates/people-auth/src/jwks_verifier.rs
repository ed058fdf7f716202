use crate::{
    AuthError, IdentityVerifier, ProviderSettings, Result as AuthErrorResult, Subject,
    LEEWAY_SECS, jwt_validator::decode_claims,
};

use std::panic::Location;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode_header, jwk::JwkSet};
use log::{debug, info, warn};
use tokio::sync::RwLock;

/// Don't hit the provider more often than this when a kid is unknown
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Keys are refetched after this age even if every kid still resolves
const MAX_KEY_AGE: Duration = Duration::from_secs(60 * 60);

/// Upper bound on a key fetch. Requests queue behind the cache lock while
/// a fetch is in flight.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

/// Verifies RS256 ID tokens against the identity provider's published keys.
pub struct JwksVerifier {
    client: reqwest::Client,
    settings: ProviderSettings,
    validation: Validation,
    cache: RwLock<Option<CachedKeys>>,
}

impl JwksVerifier {
    #[track_caller]
    pub fn new(settings: ProviderSettings) -> AuthErrorResult<Self> {
        Self::with_timeout(settings, FETCH_TIMEOUT)
    }

    /// Like `new`, with a custom bound on each key fetch.
    #[track_caller]
    pub fn with_timeout(settings: ProviderSettings, timeout: Duration) -> AuthErrorResult<Self> {
        let location = Location::caller();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::KeyFetch {
                url: settings.jwks_url.clone(),
                source: e,
                location: ErrorLocation::from(location),
            })?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECS;
        validation.set_issuer(&[settings.issuer()]);
        validation.set_audience(&[settings.project_id.as_str()]);

        Ok(Self {
            client,
            settings,
            validation,
            cache: RwLock::new(None),
        })
    }

    /// Resolve the decoding key for `kid`, refreshing the key set when it is
    /// stale or doesn't know the kid yet.
    async fn decoding_key(&self, kid: &str) -> AuthErrorResult<DecodingKey> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref()
                && cached.fetched_at.elapsed() < MAX_KEY_AGE
                && let Some(jwk) = cached.keys.find(kid)
            {
                return key_from_jwk(kid, jwk);
            }
        }

        let mut cache = self.cache.write().await;

        // Another request may have refreshed while we waited for the lock
        let recently_fetched = cache
            .as_ref()
            .is_some_and(|cached| cached.fetched_at.elapsed() < MIN_REFRESH_INTERVAL);

        if !recently_fetched {
            let keys = self.fetch_keys().await?;
            *cache = Some(CachedKeys {
                keys,
                fetched_at: Instant::now(),
            });
        } else {
            debug!("Signing keys fetched recently, not refetching for kid '{}'", kid);
        }

        match cache.as_ref().and_then(|cached| cached.keys.find(kid)) {
            Some(jwk) => key_from_jwk(kid, jwk),
            None => {
                warn!("Token signed with unknown kid '{}'", kid);
                Err(AuthError::UnknownSigningKey {
                    kid: kid.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    async fn fetch_keys(&self) -> AuthErrorResult<JwkSet> {
        let url = &self.settings.jwks_url;
        let map_err = |e: reqwest::Error| AuthError::KeyFetch {
            url: url.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        };

        let keys: JwkSet = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(map_err)?
            .json()
            .await
            .map_err(map_err)?;

        info!("Fetched {} signing keys from {}", keys.keys.len(), url);

        Ok(keys)
    }
}

#[async_trait]
impl IdentityVerifier for JwksVerifier {
    async fn verify(&self, token: &str) -> AuthErrorResult<Subject> {
        let header = decode_header(token).map_err(|e| AuthError::JwtDecode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        if header.alg != Algorithm::RS256 {
            return Err(AuthError::InvalidToken {
                message: format!("unsupported algorithm {:?}", header.alg),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let Some(kid) = header.kid else {
            return Err(AuthError::InvalidToken {
                message: "missing kid header".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let key = self.decoding_key(&kid).await?;
        decode_claims(token, &key, &self.validation).map(Subject::from_claims)
    }

    fn describe(&self) -> String {
        format!(
            "identity provider (RS256, issuer {}, keys from {})",
            self.settings.issuer(),
            self.settings.jwks_url
        )
    }
}

#[track_caller]
fn key_from_jwk(kid: &str, jwk: &jsonwebtoken::jwk::Jwk) -> AuthErrorResult<DecodingKey> {
    DecodingKey::from_jwk(jwk).map_err(|e| AuthError::InvalidToken {
        message: format!("unusable signing key '{}': {}", kid, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
