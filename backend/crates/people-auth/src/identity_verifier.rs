use crate::{Result as AuthErrorResult, Subject};

use async_trait::async_trait;

/// Turns a raw bearer token into a verified subject.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AuthErrorResult<Subject>;

    /// Short description for logging
    fn describe(&self) -> String;
}
