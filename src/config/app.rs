//! Application settings loaded from environment variables.
//!
//! Values normally come from a `.env` file loaded by the binary before
//! [`AppConfig::from_env`] runs. Every setting has a default except the seed
//! file, which is optional.

use crate::{
    config::database,
    core::invoice::DEFAULT_LATEST_INVOICES_LIMIT,
    errors::{Error, Result},
};
use std::path::PathBuf;

/// Runtime configuration for the dashboard binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Connection string passed to `SeaORM`
    pub database_url: String,
    /// TOML file with placeholder data to seed on startup
    pub seed_file: Option<PathBuf>,
    /// How many invoices the latest-invoices panel shows
    pub latest_invoices_limit: u64,
}

impl AppConfig {
    /// Reads `DATABASE_URL`, `SEED_FILE` and `LATEST_INVOICES_LIMIT` from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| database::DEFAULT_DATABASE_URL.to_string());

        let seed_file = lookup("SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let latest_invoices_limit = match lookup("LATEST_INVOICES_LIMIT") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| Error::Config {
                message: format!("LATEST_INVOICES_LIMIT must be a non-negative integer: {e}"),
            })?,
            None => DEFAULT_LATEST_INVOICES_LIMIT,
        };

        Ok(Self {
            database_url,
            seed_file,
            latest_invoices_limit,
        })
    }
}
