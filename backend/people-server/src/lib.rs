pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod verifier;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_identity::CurrentIdentity,
    people::{
        people::{create_person, delete_person, list_people, update_person},
        person_dto::PersonDto,
    },
};
pub use app_state::AppState;
pub use verifier::build_verifier;

pub use crate::routes::build_router;
