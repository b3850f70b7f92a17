//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DB_DRIVER, DEFAULT_DB_HOST, DEFAULT_PG_SSLMODE, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};
use crate::domain::Credential;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Driver selector, resolved by the connection factory
    pub driver: String,
    pub credential: Credential,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    ///
    /// Unset credential fields fall back to empty strings; the driver decides
    /// whether it can connect with them.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let credential = Credential::new(
            env::var("DB_USERNAME").unwrap_or_default(),
            env::var("DB_PASSWORD").unwrap_or_default(),
            env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string()),
            env::var("DB_NAME").unwrap_or_default(),
        )
        .with_sslmode(env::var("DB_SSLMODE").unwrap_or_else(|_| DEFAULT_PG_SSLMODE.to_string()));

        Self {
            driver: env::var("DB_DRIVER").unwrap_or_else(|_| DEFAULT_DB_DRIVER.to_string()),
            credential,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
