//! Service settings from environment variables (optionally loaded from `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/pizza_restaurants";
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub max_body_bytes: usize,
    /// Insert sample restaurants and pizzas at startup when the tables are empty.
    pub seed_sample_data: bool,
}

impl Settings {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DB_MAX_CONNECTIONS`, `MAX_BODY_BYTES` and `SEED_SAMPLE_DATA`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_or(&lookup, "BIND_ADDR", || SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", || DEFAULT_MAX_CONNECTIONS)?;
        let max_body_bytes = parse_or(&lookup, "MAX_BODY_BYTES", || DEFAULT_MAX_BODY_BYTES)?;
        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            None => false,
            Some(v) => parse_flag(&v).ok_or(ConfigError::Invalid {
                key: "SEED_SAMPLE_DATA",
                value: v,
            })?,
        };
        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            max_body_bytes,
            seed_sample_data,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: impl FnOnce() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default()),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
