use std::net::SocketAddr;
use std::str::FromStr;

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3333";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Which repository implementation backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseDriver {
    /// PostgreSQL through `catalog_db`.
    Postgres,
    /// Process-local storage; contents are lost on shutdown.
    Memory,
}

impl FromStr for DatabaseDriver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown driver '{other}', expected postgres or memory")),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}', expected text or json")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1:3333`).
    pub listen_addr: SocketAddr,
    /// Repository implementation (default: `postgres`).
    pub database_driver: DatabaseDriver,
    /// Connection string, required for the `postgres` driver.
    pub database_url: Option<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Log output format (default: `text`).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default           |
    /// |------------------------|-------------------|
    /// | `LISTEN_ADDR`          | `127.0.0.1:3333`  |
    /// | `DATABASE_DRIVER`      | `postgres`        |
    /// | `DATABASE_URL`         | (none)            |
    /// | `REQUEST_TIMEOUT_SECS` | `30`              |
    /// | `LOG_FORMAT`           | `text`            |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = parse_or(&lookup, "LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?;
        let database_driver = parse_or(&lookup, "DATABASE_DRIVER", "postgres")?;
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", "30")?;
        let log_format = parse_or(&lookup, "LOG_FORMAT", "text")?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if database_driver == DatabaseDriver::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        Ok(Self {
            listen_addr,
            database_driver,
            database_url,
            request_timeout_secs,
            log_format,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.parse().map_err(|err: T::Err| ConfigError::Invalid {
        var,
        reason: err.to_string(),
        value,
    })
}
