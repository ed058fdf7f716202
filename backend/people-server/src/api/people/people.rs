//! People REST API handlers
//!
//! Each handler is a single storage call. Owner scoping comes from the
//! caller's identity: list and create always use it when present, update
//! and delete only when mutations are scoped.

use crate::{ApiResult, AppState, CurrentIdentity, PersonDto};

use people_core::{Person, PersonPatch};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use log::debug;

// =============================================================================
// Handlers
// =============================================================================

/// GET /people
///
/// Everyone when anonymous, otherwise only the caller's own records
pub async fn list_people(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<Vec<PersonDto>>> {
    let repo = state.people();
    let people = match identity.uid() {
        Some(uid) => repo.find_by_owner(uid).await?,
        None => repo.find_all().await?,
    };

    Ok(Json(people.into_iter().map(PersonDto::from).collect()))
}

/// POST /people
///
/// The owner is always the caller; any `id`/`uid` in the body is ignored
pub async fn create_person(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    payload: Result<Json<PersonPatch>, JsonRejection>,
) -> ApiResult<Json<PersonDto>> {
    let Json(fields) = payload?;
    fields.validate()?;

    let person = Person::new(fields, identity.uid().map(str::to_string));
    state.people().create(&person).await?;
    debug!("Created person {}", person.id);

    Ok(Json(person.into()))
}

/// PUT /people/{id}
///
/// Returns the updated person, or `null` if nothing matched
pub async fn update_person(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
    payload: Result<Json<PersonPatch>, JsonRejection>,
) -> ApiResult<Json<Option<PersonDto>>> {
    let person_id = Person::parse_id(&id)?;
    let Json(patch) = payload?;
    patch.validate()?;

    let owner = owner_scope(&state, identity.uid());
    let updated = state.people().update(person_id, &patch, owner).await?;
    if updated.is_none() {
        debug!("Update matched no person for id {}", person_id);
    }

    Ok(Json(updated.map(PersonDto::from)))
}

/// DELETE /people/{id}
///
/// Returns the removed person, or `null` if nothing matched
pub async fn delete_person(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<PersonDto>>> {
    let person_id = Person::parse_id(&id)?;

    let owner = owner_scope(&state, identity.uid());
    let deleted = state.people().delete(person_id, owner).await?;
    if deleted.is_none() {
        debug!("Delete matched no person for id {}", person_id);
    }

    Ok(Json(deleted.map(PersonDto::from)))
}

fn owner_scope<'a>(state: &AppState, uid: Option<&'a str>) -> Option<&'a str> {
    if state.mutations_scoped() { uid } else { None }
}
