use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use tagcloud_tags::StoreConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidNumber(&'static str, ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub static_dir: PathBuf,
    pub store: StoreConfig,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = var_or("PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidNumber("PORT", e))?;
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let db_port = var_or("DB_PORT", "5432")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidNumber("DB_PORT", e))?;

        let max_connections = var_or("DB_MAX_CONNECTIONS", "5")
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidNumber("DB_MAX_CONNECTIONS", e))?;

        Ok(Config {
            port,
            cors_origin: var_or("CORS_ORIGIN", "http://localhost:3000"),
            static_dir: var_or("STATIC_DIR", "../frontend/build").into(),
            store: StoreConfig {
                user: var_or("DB_USER", "postgres"),
                host: var_or("DB_HOST", "localhost"),
                database: var_or("DB_NAME", "tags"),
                password: env::var("DB_PASSWORD").unwrap_or_default(),
                port: db_port,
                max_connections,
            },
        })
    }
}
