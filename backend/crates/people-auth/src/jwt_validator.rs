use crate::{AuthError, Claims, IdentityVerifier, LEEWAY_SECS, Result as AuthErrorResult, Subject};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// JWT validator with a static key, for shared-secret or pinned-key setups
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = LEEWAY_SECS;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            algorithm: Algorithm::HS256,
        }
    }

    /// Create validator with RS256 (asymmetric public key)
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("Invalid RSA public key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = LEEWAY_SECS;

        Ok(Self {
            decoding_key,
            validation,
            algorithm: Algorithm::RS256,
        })
    }

    /// Validate JWT token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        decode_claims(token, &self.decoding_key, &self.validation)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        match self.algorithm {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
            _ => "unknown",
        }
    }
}

#[async_trait]
impl IdentityVerifier for JwtValidator {
    async fn verify(&self, token: &str) -> AuthErrorResult<Subject> {
        self.validate(token).map(Subject::from_claims)
    }

    fn describe(&self) -> String {
        format!("static key ({})", self.algorithm())
    }
}

/// Decode, verify and validate a token against a known key.
#[track_caller]
pub(crate) fn decode_claims(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
) -> AuthErrorResult<Claims> {
    let location = Location::caller();
    let token_data = decode::<Claims>(token, key, validation).map_err(|e| {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                location: ErrorLocation::from(location),
            },
            ErrorKind::InvalidIssuer => AuthError::InvalidClaim {
                claim: "iss".to_string(),
                message: "unexpected issuer".to_string(),
                location: ErrorLocation::from(location),
            },
            ErrorKind::InvalidAudience => AuthError::InvalidClaim {
                claim: "aud".to_string(),
                message: "unexpected audience".to_string(),
                location: ErrorLocation::from(location),
            },
            _ => AuthError::JwtDecode {
                source: e,
                location: ErrorLocation::from(location),
            },
        }
    })?;

    token_data.claims.validate()?;

    Ok(token_data.claims)
}
