// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
const DEFAULT_PORT: u16 = 5555;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string (`DB_URI`)
    pub database_url: String,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = env::var("DB_URI")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        if database_url.is_empty() {
            return Err(ConfigError::Invalid("DB_URI", database_url));
        }

        Ok(Self {
            database_url,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            port,
        })
    }

    /// Config for tests: in-memory database, default port.
    pub fn test_default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases touch the same variables, so they run in one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("DB_URI");
        env::remove_var("PORT");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.port, 5555);

        env::set_var("DB_URI", "sqlite:///tmp/camp-test.db");
        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));

        env::set_var("PORT", "8080");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.database_url, "sqlite:///tmp/camp-test.db");
        assert_eq!(config.port, 8080);

        env::remove_var("DB_URI");
        env::remove_var("PORT");
    }
}
