//! Resolves the caller's identity from the `Authorization` header.
//!
//! A request without the header continues as anonymous. A header that is
//! present but fails verification ends the request with 400, whatever the
//! route.

use crate::{ApiError, AppState};

use people_auth::{AuthError, Identity, bearer_token};

use std::panic::Location;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;
use log::debug;

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = match (&state.verifier, request.headers().get(AUTHORIZATION)) {
        (Some(verifier), Some(value)) => {
            let header = value.to_str().map_err(|_| AuthError::InvalidToken {
                message: "authorization header is not valid ASCII".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
            let token = bearer_token(header)?.to_string();

            let subject = verifier.verify(&token).await?;
            debug!("Authenticated subject {}", subject.uid);
            Identity::Authenticated(subject)
        }
        _ => Identity::Anonymous,
    };

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
