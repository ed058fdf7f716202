use crate::ApiError;

use people_auth::Identity;

use axum::{extract::Request, middleware::Next, response::Response};

/// Route layer that turns anonymous callers away with 401.
pub async fn require_subject(request: Request, next: Next) -> Result<Response, ApiError> {
    let authenticated = request
        .extensions()
        .get::<Identity>()
        .is_some_and(Identity::is_authenticated);

    if !authenticated {
        return Err(ApiError::unauthorized());
    }

    Ok(next.run(request).await)
}
