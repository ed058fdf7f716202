use crate::middleware::{
    access_guard::require_subject, auth::authenticate, request_logging::log_request,
};
use crate::{ApiError, AppState, create_person, delete_person, health, list_people, update_person};

use std::panic::Location;

use axum::{
    Router, middleware,
    http::Uri,
    routing::{get, put},
};
use error_location::ErrorLocation;
use tower_http::cors::{Any, CorsLayer};

pub const WELCOME_MESSAGE: &str = "welcome to the people api";

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(welcome))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .merge(people_routes(&state))
        .fallback(not_found);

    // Without a verifier every request is anonymous; nothing to mount
    if state.auth_enabled() {
        router = router.layer(middleware::from_fn_with_state(state.clone(), authenticate));
    }

    router
        .with_state(state)
        .layer(middleware::from_fn(log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn people_routes(state: &AppState) -> Router<AppState> {
    let mut collection = Router::new().route("/people", get(list_people).post(create_person));
    let mut item = Router::new().route("/people/{id}", put(update_person).delete(delete_person));

    if state.auth_enabled() {
        collection = collection.route_layer(middleware::from_fn(require_subject));
    }
    if state.mutations_scoped() {
        item = item.route_layer(middleware::from_fn(require_subject));
    }

    collection.merge(item)
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        message: format!("No route for {}", uri.path()),
        location: ErrorLocation::from(Location::caller()),
    }
}
