//! Storage connector: opens the pool, migrates, and logs connection state.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open a pool against `url` and bring the schema up to date.
pub async fn connect(url: &str, max_connections: u32) -> DbErrorResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|source| DbError::Connection {
            url: url.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|source| {
            error!("Storage connection error ({}): {}", url, source);
            DbError::Connection {
                url: url.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

    info!("Storage connected: {}", url);

    migrate(&pool).await?;

    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}

/// Round-trip a trivial query; used by the readiness probe.
pub async fn ping(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Close the pool, waiting for checked-out connections to return.
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
    info!("Storage disconnected");
}
