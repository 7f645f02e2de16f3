// src/config.rs
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Postgres {
        database_url: String,
        max_connections: u32,
        run_migrations: bool,
    },
    /// Fixture file, or the built-in demo catalog when `None`.
    Memory { fixtures: Option<PathBuf> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub catalog: CatalogSource,
}

impl Config {
    /// Reads the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = parse_or(&get, "HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?;
        let port = parse_or(&get, "PORT", DEFAULT_PORT)?;

        let database_url = get("DATABASE_URL");
        let default_backend = if database_url.is_some() { "postgres" } else { "memory" };
        let backend = get("CATALOG_BACKEND").unwrap_or_else(|| default_backend.to_string());

        let catalog = match backend.trim().to_ascii_lowercase().as_str() {
            "postgres" => CatalogSource::Postgres {
                database_url: database_url.ok_or(ConfigError::Missing("DATABASE_URL"))?,
                max_connections: parse_or(&get, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
                run_migrations: parse_bool_or(&get, "RUN_MIGRATIONS", true)?,
            },
            "memory" => CatalogSource::Memory {
                fixtures: get("CATALOG_FIXTURES").map(PathBuf::from),
            },
            _ => {
                return Err(ConfigError::Invalid {
                    key: "CATALOG_BACKEND",
                    value: backend,
                })
            }
        };

        Ok(Self { host, port, catalog })
    }
}

fn parse_or<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_bool_or(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match get(key) {
        None => Ok(default),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
    }
}
