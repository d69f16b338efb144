//! Configuration system for roombook.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file in the data directory
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOMBOOK_*`)
//! 3. User config (`<data_dir>/config.yaml`, data dir defaulting to `~/.roombook`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use roombook::config::ConfigBuilder;
//! use roombook::database::{resolve_database_path, Database};
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let db_config = config.database_config(resolve_database_path().unwrap());
//! let db = Database::open(db_config).unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{
    AdminConfig, Config, OutputFormat, DEFAULT_BUSY_TIMEOUT_SECONDS,
    DEFAULT_RESET_CODE_TTL_MINUTES, MAX_RESET_CODE_TTL_MINUTES,
};
pub use validator::ConfigValidator;
