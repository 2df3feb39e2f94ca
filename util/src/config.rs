//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from `.env` and environment variables.
//! Tests override individual fields through the per-field setters; everything
//! else reads through the free accessor functions at the bottom of this module.

use std::env;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

const DEV_JWT_SECRET: &str = "insecure-development-secret";

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: u64,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every value has a development default so the server and the tests start
    /// without any environment; `main` warns when the JWT secret is left at its default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "practice-hub".into()),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "api=info,services=info,ai=info,db=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/practice-hub.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: parse_or("PORT", 3000),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.into()),
            jwt_duration_minutes: parse_or("JWT_DURATION_MINUTES", 60),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into()),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_jwt_secret(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.jwt_secret = value.into());
    }

    pub fn set_jwt_duration_minutes(value: u64) {
        AppConfig::set_field(|cfg| cfg.jwt_duration_minutes = value);
    }

    pub fn set_gemini_api_key(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.gemini_api_key = value.into());
    }

    pub fn set_gemini_base_url(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.gemini_base_url = value.into());
    }
}

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn jwt_secret() -> String {
    AppConfig::global().jwt_secret.clone()
}

/// True while the JWT secret is still the built-in development value.
pub fn jwt_secret_is_default() -> bool {
    AppConfig::global().jwt_secret == DEV_JWT_SECRET
}

pub fn jwt_duration_minutes() -> u64 {
    AppConfig::global().jwt_duration_minutes
}

pub fn gemini_api_key() -> String {
    AppConfig::global().gemini_api_key.clone()
}

pub fn gemini_model() -> String {
    AppConfig::global().gemini_model.clone()
}

pub fn gemini_base_url() -> String {
    AppConfig::global().gemini_base_url.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn setters_override_loaded_values() {
        AppConfig::set_jwt_secret("s3cret");
        AppConfig::set_database_path("sqlite::memory:");
        assert_eq!(jwt_secret(), "s3cret");
        assert_eq!(database_path(), "sqlite::memory:");
        assert!(!jwt_secret_is_default());
        AppConfig::reset();
    }

    #[test]
    #[serial]
    fn defaults_are_usable_without_environment() {
        let cfg = AppConfig::from_env();
        assert!(cfg.port > 0);
        assert!(!cfg.gemini_model.is_empty());
        assert!(cfg.gemini_base_url.starts_with("http"));
    }
}
