//! Configuration module for environment variables and application settings

use anyhow::Result;
use std::env;

use crate::database::connection::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    /// Load server settings from the environment.
    ///
    /// `PORT` (set by most PaaS providers) takes precedence over
    /// `SERVER_PORT`; both fall back to 3000.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
        }
    }
}
