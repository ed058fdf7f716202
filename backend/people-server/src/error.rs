use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {source} {location}")]
    Config {
        source: people_config::ConfigError,
        location: ErrorLocation,
    },

    #[error("Identity verifier error: {source} {location}")]
    Auth {
        source: people_auth::AuthError,
        location: ErrorLocation,
    },

    #[error("Failed to read public key {path}: {source} {location}")]
    KeyFile {
        path: PathBuf,
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Identity provider setup failed: {message} {location}")]
    AuthSetup {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl From<people_config::ConfigError> for ServerError {
    #[track_caller]
    fn from(source: people_config::ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<people_auth::AuthError> for ServerError {
    #[track_caller]
    fn from(source: people_auth::AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
