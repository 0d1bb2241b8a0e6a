//! Configuration management for the dashboard.

/// Application settings read from environment variables
pub mod app;

/// Database configuration and connection management
pub mod database;

/// Placeholder data loading from a TOML seed file
pub mod seed;

pub use app::AppConfig;
