//! Database configuration loaded from environment variables
//!
//! Environment variables:
//!   DB_HOST      # default: 127.0.0.1
//!   DB_PORT      # default: 5432
//!   DB_USER      # default: unset
//!   DB_PASSWORD  # default: unset
//!   DB_NAME      # default: unset
//!   DB_DRIVER    # default: postgres (the only supported driver)
//!   TZ           # session time zone, default: Asia/Vientiane

use std::fmt;

use chrono_tz::Tz;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_DRIVER: &str = "postgres";
const DEFAULT_TIME_ZONE: Tz = chrono_tz::Asia::Vientiane;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid DB_PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("unsupported DB_DRIVER '{0}' (only postgres is supported)")]
    UnsupportedDriver(String),

    #[error("invalid TZ '{value}': {reason}")]
    InvalidTimeZone { value: String, reason: String },
}

/// Database driver named by DB_DRIVER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Postgres,
}

impl Driver {
    fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(ConfigError::UnsupportedDriver(s.to_owned())),
        }
    }
}

/// Connection settings, read once at startup and passed to the pool.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub driver: Driver,
    pub time_zone: Tz,
}

// Hand-written so the password never reaches logs
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("driver", &self.driver)
            .field("time_zone", &self.time_zone)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: None,
            password: None,
            database: None,
            driver: Driver::Postgres,
            time_zone: DEFAULT_TIME_ZONE,
        }
    }
}

impl DatabaseConfig {
    /// Load from process environment, falling back to defaults for unset
    /// or empty variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match get("DB_PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let driver = Driver::parse(&get("DB_DRIVER").unwrap_or_else(|| DEFAULT_DRIVER.to_string()))?;

        let time_zone = match get("TZ") {
            Some(value) => value
                .parse::<Tz>()
                .map_err(|e| ConfigError::InvalidTimeZone {
                    reason: e.to_string(),
                    value,
                })?,
            None => DEFAULT_TIME_ZONE,
        };

        Ok(Self {
            host: get("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            user: get("DB_USER"),
            password: get("DB_PASSWORD"),
            database: get("DB_NAME"),
            driver,
            time_zone,
        })
    }

    /// Build sqlx connect options: TLS disabled, session `TimeZone` set.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .ssl_mode(PgSslMode::Disable)
            .options([("TimeZone", self.time_zone.name())]);

        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }
        options
    }
}
