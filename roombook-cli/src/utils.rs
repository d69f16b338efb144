//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, database
//! management, and time parsing and formatting.

use crate::error::CliError;
use chrono::{DateTime, NaiveDateTime, Utc};
use roombook::config::OutputFormat;
use roombook::database::DATABASE_FILE_NAME;
use roombook::{Config, ConfigBuilder, Database, User};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
///
/// Verbosity is consumed by the logger in `main` and is not carried here.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,
}

/// Resolve the data directory path.
///
/// Priority: `--data-dir` (or `ROOMBOOK_DATA_DIR`, which clap folds into the
/// flag) > `~/.roombook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref data_dir) => Ok(data_dir.clone()),
        None => roombook::database::resolve_data_dir()
            .map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load layered configuration from the data directory and environment.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open (and bootstrap if needed) the store in the data directory.
///
/// `--busy-timeout` wins over the configured timeout.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);
    let mut db_config = config.database_config(db_path);

    if let Some(timeout_seconds) = global.busy_timeout {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds.into()));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Check credentials and require the administrator flag.
pub fn require_admin(db: &Database, username: &str, password: &str) -> Result<User, CliError> {
    let user = db.login(username, password)?;
    if !user.is_admin() {
        return Err(CliError::SemanticFailure(format!(
            "User '{username}' is not an administrator"
        )));
    }
    Ok(user)
}

/// Parse a UTC instant from the command line.
///
/// Accepts RFC 3339 (`2025-03-03T09:00:00Z`) or a bare `YYYY-MM-DD HH:MM`
/// (also with `T`), read as UTC.
pub fn parse_time(value: &str) -> Result<DateTime<Utc>, CliError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(CliError::InvalidArguments(format!(
        "cannot parse '{value}' as a time (expected RFC 3339 or YYYY-MM-DD HH:MM)"
    )))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Pick the listing format: command flag > configuration > table.
pub fn effective_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or(config.output_format).unwrap_or_default()
}

/// Write a JSON value to stdout, pretty-printed.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    println!("{rendered}");
    Ok(())
}
