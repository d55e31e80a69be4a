/**
 * Server Configuration
 *
 * Configuration is read from environment variables once at startup and
 * injected into the components that need it; nothing reads the environment
 * ad hoc afterwards.
 *
 * # Variables
 *
 * - `JWT_SECRET` - required; the token signing secret. A missing or empty
 *   value is a startup error, not a silent fallback.
 * - `DATABASE_URL` - optional; defaults to a local SQLite file.
 * - `SERVER_PORT` - optional; defaults to 3001.
 */

use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3001;

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://changelog.db?mode=rwc";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The signing secret is mandatory; without it every issued token
    /// would be unverifiable.
    #[error("JWT_SECRET must be set and non-empty")]
    MissingJwtSecret,

    #[error("SERVER_PORT is not a valid port: {0}")]
    InvalidPort(String),
}

/// Process-wide server configuration, immutable after startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = match std::env::var("SERVER_PORT") {
            Err(_) => DEFAULT_PORT,
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
        };

        Ok(Self {
            port,
            database_url,
            jwt_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("SERVER_PORT");
    }

    #[test]
    #[serial]
    fn test_missing_secret_is_an_error() {
        clear_env();
        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingJwtSecret)));
    }

    #[test]
    #[serial]
    fn test_empty_secret_is_an_error() {
        clear_env();
        std::env::set_var("JWT_SECRET", "");
        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingJwtSecret)));
    }

    #[test]
    #[serial]
    fn test_defaults_apply() {
        clear_env();
        std::env::set_var("JWT_SECRET", "secret");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.jwt_secret, "secret");
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("JWT_SECRET", "secret");
        std::env::set_var("SERVER_PORT", "not-a-port");
        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }

    #[test]
    #[serial]
    fn test_overrides_apply() {
        clear_env();
        std::env::set_var("JWT_SECRET", "secret");
        std::env::set_var("SERVER_PORT", "8080");
        std::env::set_var("DATABASE_URL", "sqlite::memory:");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
    }
}
