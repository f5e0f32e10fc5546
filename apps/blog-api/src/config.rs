//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_infra::{ConfigError, DatabaseConfig, DatabaseCredentials};

/// Greeting served on `GET /`.
pub const DEFAULT_GREETING: &str = "Blog de Peliculas de Marchena";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub greeting: String,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        // DATABASE_URL wins over the discrete DB_* settings.
        let mut database = match lookup("DATABASE_URL") {
            Some(url) => DatabaseConfig::new(url),
            None => DatabaseConfig::from_credentials(&DatabaseCredentials {
                host: var("DB_HOST", "localhost"),
                port: parse_var(&lookup, "DB_PORT").unwrap_or(3306),
                user: var("DB_USER", "marchena"),
                password: var("DB_PASSWORD", "1234"),
                database: var("DB_NAME", "blog_marchena"),
            })?,
        };
        if let Some(max) = parse_var(&lookup, "DB_MAX_CONNECTIONS") {
            database.max_connections = max;
        }
        if let Some(min) = parse_var(&lookup, "DB_MIN_CONNECTIONS") {
            database.min_connections = min;
        }

        Ok(Self {
            host: var("HOST", "127.0.0.1"),
            port: parse_var(&lookup, "PORT").unwrap_or(22398),
            greeting: var("APP_GREETING", DEFAULT_GREETING),
            database,
        })
    }
}

/// A variable parsed into `T`; unset or unparseable both mean "use the default".
fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|raw| raw.trim().parse().ok())
}
