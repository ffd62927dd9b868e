//! Load server configuration from the process environment (after `.env` has been applied).

use crate::config::types::*;
use crate::config::validate_identifier;
use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;

impl ServerConfig {
    /// Read configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the raw value for a variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or(&get, "PORT", DEFAULT_PORT)?;
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let body_limit_bytes = parse_or(&get, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?;

        let connect_options = match get("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url).map_err(ConfigError::DatabaseUrl)?,
            None => {
                let db_port: u16 = parse_or(&get, "DB_PORT", 5432)?;
                let options = PgConnectOptions::new_without_pgpass()
                    .host(&get("DB_HOST").unwrap_or_else(|| "localhost".into()))
                    .port(db_port)
                    .username(&get("DB_USER").unwrap_or_else(|| "postgres".into()))
                    .database(&get("DB_NAME").unwrap_or_else(|| "school_finder".into()));
                match get("DB_PASSWORD") {
                    Some(password) => options.password(&password),
                    None => options,
                }
            }
        };
        let max_connections = parse_or(&get, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Validation("DB_MAX_CONNECTIONS must be at least 1".into()));
        }
        let schema = get("DB_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        validate_identifier("DB_SCHEMA", &schema)?;

        Ok(ServerConfig {
            host,
            port,
            body_limit_bytes,
            database: DatabaseConfig {
                connect_options,
                max_connections,
                schema,
            },
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
