//! Axum extractor for the identity established by the auth middleware

use crate::ApiError;

use people_auth::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The caller's identity.
///
/// Falls back to `Identity::Anonymous` when the auth middleware isn't
/// mounted, so handlers work unchanged with auth disabled.
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let identity = parts.extensions.get::<Identity>().cloned().unwrap_or_default();
            Ok(CurrentIdentity(identity))
        }
    }
}
