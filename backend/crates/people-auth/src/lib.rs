pub mod bearer;
pub mod claims;
pub mod error;
pub mod identity;
pub mod identity_verifier;
pub mod jwks_verifier;
pub mod jwt_validator;
pub mod provider_settings;
pub mod subject;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity::Identity;
pub use identity_verifier::IdentityVerifier;
pub use jwks_verifier::JwksVerifier;
pub use jwt_validator::JwtValidator;
pub use provider_settings::ProviderSettings;
pub use subject::Subject;

/// Clock skew tolerated on `exp`/`nbf`/`iat`, in seconds
const LEEWAY_SECS: u64 = 30;

/// Upper bound on the `sub` claim
const MAX_SUBJECT_LENGTH: usize = 128;
