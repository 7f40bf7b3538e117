//! Runtime configuration loaded from environment variables.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Connection settings for the `PostgreSQL` store.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database host name.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Login role.
    pub user: String,
    /// Password; omitted from the connection URL when empty.
    pub password: String,
    /// Database name.
    pub name: String,
}

impl DatabaseConfig {
    /// Builds a `postgres://` connection URL.
    #[must_use]
    pub fn url(&self) -> String {
        let credentials = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.password)
        };
        format!(
            "postgres://{credentials}@{}:{}/{}",
            self.host, self.port, self.name
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP listen port.
    pub server_port: u16,
    /// Store connection settings.
    pub database: DatabaseConfig,
    /// Initial connection attempts before giving up.
    pub connect_attempts: u32,
    /// Base delay between connection attempts.
    pub connect_backoff: Duration,
    /// Maximum pooled connections.
    pub pool_size: u32,
    /// Time allowed for in-flight requests to finish on shutdown.
    pub shutdown_grace: Duration,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("invalid value {value:?} for {key}: {expected}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
        /// What the value should look like.
        expected: &'static str,
    },
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not
    /// parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());
        let text = |key: &str, default: &str| value(key).unwrap_or_else(|| default.to_owned());

        let database = DatabaseConfig {
            host: text("DB_HOST", "localhost"),
            port: parse_or(value("DB_PORT"), "DB_PORT", 5432, "a port number")?,
            user: text("DB_USER", "user"),
            password: text("DB_PASSWORD", ""),
            name: text("DB_NAME", ""),
        };

        Ok(Self {
            server_port: parse_or(value("SERVER_PORT"), "SERVER_PORT", 8080, "a port number")?,
            database,
            connect_attempts: parse_or(
                value("DB_CONNECT_ATTEMPTS"),
                "DB_CONNECT_ATTEMPTS",
                5,
                "a positive integer",
            )?
            .max(1),
            connect_backoff: Duration::from_secs(parse_or(
                value("DB_CONNECT_BACKOFF_SECS"),
                "DB_CONNECT_BACKOFF_SECS",
                2,
                "a whole number of seconds",
            )?),
            pool_size: parse_or(value("DB_POOL_SIZE"), "DB_POOL_SIZE", 10, "a positive integer")?
                .max(1),
            shutdown_grace: Duration::from_secs(parse_or(
                value("SHUTDOWN_GRACE_SECS"),
                "SHUTDOWN_GRACE_SECS",
                5,
                "a whole number of seconds",
            )?),
        })
    }

    /// Returns the store connection URL.
    #[must_use]
    pub fn database_url(&self) -> String {
        self.database.url()
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.map_or(Ok(default), |text| {
        text.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: text,
            expected,
        })
    })
}
