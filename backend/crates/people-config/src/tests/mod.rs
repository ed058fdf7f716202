
use std::env;

use tempfile::TempDir;

/// Variables read by `Config::load` that must not leak in from the host
const OVERRIDE_VARS: &[&str] = &[
    "PORT",
    "DATABASE_URL",
    "PEOPLE_SERVER_HOST",
    "PEOPLE_SERVER_PORT",
    "PEOPLE_DATABASE_URL",
    "PEOPLE_DATABASE_MAX_CONNECTIONS",
    "PEOPLE_AUTH_ENABLED",
    "PEOPLE_AUTH_JWT_SECRET",
    "PEOPLE_AUTH_JWT_PUBLIC_KEY_PATH",
    "PEOPLE_AUTH_CREDENTIALS",
    "PEOPLE_AUTH_CREDENTIALS_PATH",
    "PEOPLE_AUTH_JWKS_URL",
    "PEOPLE_AUTH_SCOPE_MUTATIONS",
    "PEOPLE_LOG_LEVEL",
    "PEOPLE_LOG_COLORED",
    "PEOPLE_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory wired through PEOPLE_CONFIG_DIR, with every
/// override variable cleared for the lifetime of the returned guards.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = OVERRIDE_VARS.iter().map(|&k| EnvGuard::remove(k)).collect();
    guards.push(EnvGuard::set(
        "PEOPLE_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    ));
    (temp, guards)
}

pub(crate) const VALID_CREDENTIALS: &str = r#"{
    "type": "service_account",
    "project_id": "people-api-test",
    "private_key_id": "abc123",
    "client_email": "svc@people-api-test.iam.gserviceaccount.com"
}"#;
