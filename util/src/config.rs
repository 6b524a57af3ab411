//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Weekly purge fires on Sunday at 23:59 (UTC).
pub const DEFAULT_PURGE_CRON: &str = "0 59 23 * * Sun";

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
    pub purge_cron: String,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Missing or malformed values fall back to development defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "athletrack".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info,services=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/athletrack.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            purge_cron: env::var("PURGE_CRON").unwrap_or_else(|_| DEFAULT_PURGE_CRON.into()),
        }
    }

    /// Returns a snapshot of the global configuration.
    pub fn global() -> AppConfig {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        match lock.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        AppConfig::set_field(|cfg| *cfg = AppConfig::from_env());
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = match lock.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }

    pub fn set_purge_cron(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.purge_cron = value.into());
    }
}

// --- Free accessors used across the workspace ---

pub fn env() -> String {
    AppConfig::global().env
}

pub fn project_name() -> String {
    AppConfig::global().project_name
}

pub fn log_level() -> String {
    AppConfig::global().log_level
}

pub fn log_file() -> String {
    AppConfig::global().log_file
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path
}

pub fn host() -> String {
    AppConfig::global().host
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn purge_cron() -> String {
    AppConfig::global().purge_cron
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn setters_override_and_reset_restores() {
        AppConfig::set_port(4555);
        AppConfig::set_purge_cron("*/5 * * * * *");
        assert_eq!(port(), 4555);
        assert_eq!(purge_cron(), "*/5 * * * * *");

        unsafe {
            env::remove_var("PURGE_CRON");
        }
        AppConfig::reset();
        assert_eq!(purge_cron(), DEFAULT_PURGE_CRON);
    }

    #[test]
    #[serial]
    fn malformed_port_falls_back_to_default() {
        unsafe {
            env::set_var("PORT", "not-a-port");
        }
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.port, 3000);
        unsafe {
            env::remove_var("PORT");
        }
    }
}
