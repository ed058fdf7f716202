use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("No signing key published for kid '{kid}' {location}")]
    UnknownSigningKey {
        kid: String,
        location: ErrorLocation,
    },

    #[error("Failed to fetch signing keys from {url}: {source} {location}")]
    KeyFetch {
        url: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::UnknownSigningKey { .. } => "UNKNOWN_SIGNING_KEY",
            Self::KeyFetch { .. } => "KEY_FETCH_FAILED",
        }
    }

    /// Client-facing message, without the source location suffix
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidToken { message, .. } => format!("Invalid token: {}", message),
            Self::TokenExpired { .. } => "Token expired".to_string(),
            Self::InvalidScheme { .. } => {
                "Invalid authorization scheme: expected 'Bearer'".to_string()
            }
            Self::JwtDecode { source, .. } => format!("JWT decode failed: {}", source),
            Self::InvalidClaim { claim, message, .. } => {
                format!("Invalid claim '{}': {}", claim, message)
            }
            Self::UnknownSigningKey { kid, .. } => {
                format!("No signing key published for kid '{}'", kid)
            }
            Self::KeyFetch { .. } => "Identity provider unavailable".to_string(),
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
