mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod service_credentials;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use service_credentials::ServiceCredentials;

#[cfg(test)]
mod tests;

// Server
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const MIN_PORT: u16 = 1024;

// Database
const DEFAULT_DATABASE_URL: &str = "sqlite:people.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

// Auth
const DEFAULT_AUTH_ENABLED: bool = false;
const DEFAULT_SCOPE_MUTATIONS: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

// Logging
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "PEOPLE_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".people";
const CONFIG_FILE_NAME: &str = "config.toml";
