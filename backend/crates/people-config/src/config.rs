use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PEOPLE_CONFIG_DIR env var, else use ./.people/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply legacy (PORT, DATABASE_URL) then PEOPLE_* env overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: PEOPLE_CONFIG_DIR env var > ./.people/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be a relative file name and cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        Ok(Some(log_dir.join(file)))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.url, self.database.max_connections
        );
        info!("  auth: {}", self.auth.mode());
        if self.auth.enabled {
            info!(
                "  auth: mutations {}",
                if self.auth.scope_mutations {
                    "owner-scoped"
                } else {
                    "not owner-scoped"
                }
            );
        }
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Legacy names first so the PEOPLE_* variants win
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_string("DATABASE_URL", &mut self.database.url);

        // Server
        Self::apply_env_string("PEOPLE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PEOPLE_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PEOPLE_DATABASE_URL", &mut self.database.url);
        Self::apply_env_parse(
            "PEOPLE_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_bool("PEOPLE_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("PEOPLE_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "PEOPLE_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string("PEOPLE_AUTH_CREDENTIALS", &mut self.auth.credentials);
        Self::apply_env_option_string(
            "PEOPLE_AUTH_CREDENTIALS_PATH",
            &mut self.auth.credentials_path,
        );
        Self::apply_env_string("PEOPLE_AUTH_JWKS_URL", &mut self.auth.jwks_url);
        Self::apply_env_bool(
            "PEOPLE_AUTH_SCOPE_MUTATIONS",
            &mut self.auth.scope_mutations,
        );

        // Logging
        Self::apply_env_parse("PEOPLE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PEOPLE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PEOPLE_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
