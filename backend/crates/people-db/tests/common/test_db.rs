use people_core::{Person, PersonPatch};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    people_db::connection::storage::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Unsaved person with the given name and optional owner
pub fn person(name: &str, owner: Option<&str>) -> Person {
    Person::new(
        PersonPatch {
            name: Some(Some(name.to_string())),
            image: Some(Some(format!("/img/{}.png", name.to_lowercase()))),
            title: Some(Some("Engineer".to_string())),
        },
        owner.map(str::to_string),
    )
}
