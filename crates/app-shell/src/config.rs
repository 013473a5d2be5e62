//! Environment configuration.

use std::env;
use std::time::Duration;

use session::MockAuthenticator;
use storage::Database;

use crate::error::{Result, ShellError};

/// Default SQLite database location.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:roamly.db?mode=rwc";

/// Runtime configuration for [`AppContext`](crate::AppContext).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite URL for the local key-value store.
    pub database_url: String,
    /// Connection pool size.
    pub pool_size: u32,
    /// Simulated authenticator round-trip.
    pub auth_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            pool_size: Database::DEFAULT_POOL_SIZE,
            auth_delay: MockAuthenticator::DEFAULT_DELAY,
        }
    }
}

impl AppConfig {
    /// Create configuration from environment variables.
    ///
    /// - `ROAMLY_DATABASE_URL` (default `sqlite:roamly.db?mode=rwc`)
    /// - `ROAMLY_DB_POOL_SIZE` (default 5)
    /// - `ROAMLY_AUTH_DELAY_MS` (default 1000)
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("ROAMLY_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let pool_size = parse_var("ROAMLY_DB_POOL_SIZE")?.unwrap_or(Database::DEFAULT_POOL_SIZE);
        if pool_size == 0 {
            return Err(ShellError::Configuration(
                "ROAMLY_DB_POOL_SIZE must be at least 1".to_string(),
            ));
        }

        let auth_delay = parse_var("ROAMLY_AUTH_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(MockAuthenticator::DEFAULT_DELAY);

        Ok(Self {
            database_url,
            pool_size,
            auth_delay,
        })
    }

    /// In-memory database with no auth delay.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            pool_size: 1,
            auth_delay: Duration::ZERO,
        }
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn with_auth_delay(mut self, delay: Duration) -> Self {
        self.auth_delay = delay;
        self
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ShellError::Configuration(format!("{name} is not a valid number: {raw}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.pool_size, 5);
        assert_eq!(config.auth_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default()
            .with_database_url("sqlite:other.db")
            .with_auth_delay(Duration::from_millis(5));
        assert_eq!(config.database_url, "sqlite:other.db");
        assert_eq!(config.auth_delay, Duration::from_millis(5));
    }

    #[test]
    fn test_parse_missing_var() {
        let parsed: Option<u32> = parse_var("ROAMLY_TEST_SURELY_UNSET_VAR").unwrap();
        assert!(parsed.is_none());
    }
}
