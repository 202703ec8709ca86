//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.
//!
//! Handlers never read the database settings from here directly; `main` builds the
//! connection once and injects it through `AppState`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// PostgreSQL connection settings, present only when `DB_HOST` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct PostgresConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    pub sslmode: String,
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    pub postgres: Option<PostgresConfig>,
    pub database_path: String,
    pub otp_expiry_minutes: i64,
    pub otp_digits: u32,
    pub device_pairing: bool,
    pub recent_history_limit: u64,
}

/// Characters left as-is in the userinfo part of a connection URL.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parses `key`, falling back to `default` (with a warning) when the value is malformed.
fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {key} value '{raw}', using default: {default}");
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every value has a default so the server can boot against a local SQLite file
    /// with no environment at all.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let postgres = env::var("DB_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .map(|host| PostgresConfig {
                host,
                user: var_or("DB_USER", "postgres"),
                password: var_or("DB_PASSWORD", ""),
                name: var_or("DB_NAME", "attendance"),
                port: parse_or("DB_PORT", 5432),
                sslmode: var_or("DB_SSLMODE", "disable"),
            });

        Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "trainee-attendance"),
            log_level: var_or("LOG_LEVEL", "api=info,db=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "false") == "true",
            host: var_or("HOST", "0.0.0.0"),
            port: parse_or("PORT", 8080),
            postgres,
            database_path: var_or("DATABASE_PATH", "data/attendance.db"),
            otp_expiry_minutes: parse_or("OTP_EXPIRY_MINUTES", 30),
            otp_digits: parse_or("OTP_DIGITS", 4),
            device_pairing: var_or("DEVICE_PAIRING", "true") != "false",
            recent_history_limit: parse_or("RECENT_HISTORY_LIMIT", 5),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock cannot be acquired.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            if let Ok(mut guard) = lock.write() {
                *guard = AppConfig::from_env();
            }
        }
    }

    /// Builds the SeaORM connection URL for the configured backend.
    pub fn database_url(&self) -> String {
        match &self.postgres {
            Some(pg) => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode={}",
                utf8_percent_encode(&pg.user, USERINFO),
                utf8_percent_encode(&pg.password, USERINFO),
                pg.host,
                pg.port,
                pg.name,
                pg.sslmode
            ),
            None if self.database_path.starts_with("sqlite:") => self.database_path.clone(),
            None => format!("sqlite://{}?mode=rwc", self.database_path),
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

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| {
            cfg.postgres = None;
            cfg.database_path = value.into();
        });
    }

    pub fn set_otp_expiry_minutes(value: i64) {
        AppConfig::set_field(|cfg| cfg.otp_expiry_minutes = value);
    }

    pub fn set_otp_digits(value: u32) {
        AppConfig::set_field(|cfg| cfg.otp_digits = value);
    }

    pub fn set_device_pairing(value: bool) {
        AppConfig::set_field(|cfg| cfg.device_pairing = value);
    }

    pub fn set_recent_history_limit(value: u64) {
        AppConfig::set_field(|cfg| cfg.recent_history_limit = value);
    }
}

// --- Free accessors, mirroring the fields above ---

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

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn database_url() -> String {
    AppConfig::global().database_url()
}

pub fn otp_expiry_minutes() -> i64 {
    AppConfig::global().otp_expiry_minutes
}

pub fn otp_digits() -> u32 {
    AppConfig::global().otp_digits
}

pub fn device_pairing() -> bool {
    AppConfig::global().device_pairing
}

pub fn recent_history_limit() -> u64 {
    AppConfig::global().recent_history_limit
}
