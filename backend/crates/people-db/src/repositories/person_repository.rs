//! Person repository. Every method is a single statement, so each call is
//! atomic on its own; there are no multi-step transactions here.
//!
//! Timestamps are stored as Unix milliseconds.

use crate::{DbError, Result as DbErrorResult};

use people_core::{Person, PersonPatch};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "people";

#[derive(Debug, FromRow)]
pub(crate) struct PersonRow {
    pub(crate) id: String,
    pub(crate) name: Option<String>,
    pub(crate) image: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) uid: Option<String>,
    pub(crate) created_at: i64,
    pub(crate) updated_at: i64,
}

impl TryFrom<PersonRow> for Person {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: PersonRow) -> DbErrorResult<Self> {
        let location = Location::caller();
        let corrupt = |message: String| DbError::CorruptRow {
            table: TABLE,
            message,
            location: ErrorLocation::from(location),
        };

        Ok(Person {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| corrupt(format!("Invalid UUID in people.id: {}", e)))?,
            name: row.name,
            image: row.image,
            title: row.title,
            uid: row.uid,
            created_at: from_millis(row.created_at)
                .ok_or_else(|| corrupt("Invalid timestamp in people.created_at".to_string()))?,
            updated_at: from_millis(row.updated_at)
                .ok_or_else(|| corrupt("Invalid timestamp in people.updated_at".to_string()))?,
        })
    }
}

fn from_millis(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
}

fn into_people(rows: Vec<PersonRow>) -> DbErrorResult<Vec<Person>> {
    rows.into_iter().map(Person::try_from).collect()
}

pub struct PersonRepository {
    pool: SqlitePool,
}

impl PersonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, person: &Person) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO people (id, name, image, title, uid, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(person.id.to_string())
        .bind(&person.name)
        .bind(&person.image)
        .bind(&person.title)
        .bind(&person.uid)
        .bind(person.created_at.timestamp_millis())
        .bind(person.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Person>> {
        let rows = sqlx::query_as::<_, PersonRow>(
            r#"
                SELECT id, name, image, title, uid, created_at, updated_at
                FROM people
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        into_people(rows)
    }

    pub async fn find_by_owner(&self, uid: &str) -> DbErrorResult<Vec<Person>> {
        let rows = sqlx::query_as::<_, PersonRow>(
            r#"
                SELECT id, name, image, title, uid, created_at, updated_at
                FROM people
                WHERE uid = ?
            "#,
        )
        .bind(uid)
        .fetch_all(&self.pool)
        .await?;

        into_people(rows)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Person>> {
        let row = sqlx::query_as::<_, PersonRow>(
            r#"
                SELECT id, name, image, title, uid, created_at, updated_at
                FROM people
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Person::try_from).transpose()
    }

    /// Replace the fields present in `patch` and bump `updated_at`. A field
    /// sent as `null` is cleared; an absent one keeps its stored value.
    ///
    /// With `owner` set, only a record owned by that subject matches.
    /// Returns `None` when nothing matched.
    pub async fn update(
        &self,
        id: Uuid,
        patch: &PersonPatch,
        owner: Option<&str>,
    ) -> DbErrorResult<Option<Person>> {
        let row = sqlx::query_as::<_, PersonRow>(
            r#"
                UPDATE people
                SET name = CASE WHEN ?1 THEN ?2 ELSE name END,
                    image = CASE WHEN ?3 THEN ?4 ELSE image END,
                    title = CASE WHEN ?5 THEN ?6 ELSE title END,
                    updated_at = ?7
                WHERE id = ?8 AND (?9 IS NULL OR uid = ?9)
                RETURNING id, name, image, title, uid, created_at, updated_at
            "#,
        )
        .bind(patch.name.is_some())
        .bind(patch.name.as_ref().and_then(Option::as_deref))
        .bind(patch.image.is_some())
        .bind(patch.image.as_ref().and_then(Option::as_deref))
        .bind(patch.title.is_some())
        .bind(patch.title.as_ref().and_then(Option::as_deref))
        .bind(Utc::now().timestamp_millis())
        .bind(id.to_string())
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Person::try_from).transpose()
    }

    /// Remove a record, returning it. Owner scoping as for `update`.
    pub async fn delete(&self, id: Uuid, owner: Option<&str>) -> DbErrorResult<Option<Person>> {
        let row = sqlx::query_as::<_, PersonRow>(
            r#"
                DELETE FROM people
                WHERE id = ?1 AND (?2 IS NULL OR uid = ?2)
                RETURNING id, name, image, title, uid, created_at, updated_at
            "#,
        )
        .bind(id.to_string())
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Person::try_from).transpose()
    }
}
