use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to connect to {url}: {source} {location}")]
    Connection {
        url: String,
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {table}: {message} {location}")]
    CorruptRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Message safe to hand back to a client (no source location)
    pub fn client_message(&self) -> String {
        match self {
            Self::Sqlx { source, .. } => source.to_string(),
            Self::Migration { message, .. } => message.clone(),
            Self::Connection { source, .. } => source.to_string(),
            Self::CorruptRow { table, message, .. } => format!("{}: {}", table, message),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
