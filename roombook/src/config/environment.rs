//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ROOMBOOK_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// | Variable | Field |
/// |---|---|
/// | `ROOMBOOK_BUSY_TIMEOUT_SECONDS` | `busy_timeout_seconds` |
/// | `ROOMBOOK_RESET_CODE_TTL_MINUTES` | `reset_code_ttl_minutes` |
/// | `ROOMBOOK_ADMIN_EMAIL` | `admin.email` |
/// | `ROOMBOOK_ADMIN_FULL_NAME` | `admin.full_name` |
/// | `ROOMBOOK_ADMIN_PASSWORD` | `admin.password` |
/// | `ROOMBOOK_OUTPUT_FORMAT` | `output_format` |
///
/// # Examples
///
/// ```no_run
/// use roombook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or the output
    /// format is unknown.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("ROOMBOOK_BUSY_TIMEOUT_SECONDS") {
            config.busy_timeout_seconds =
                Some(Self::parse_u64("ROOMBOOK_BUSY_TIMEOUT_SECONDS", &val)?);
        }

        if let Ok(val) = env::var("ROOMBOOK_RESET_CODE_TTL_MINUTES") {
            config.reset_code_ttl_minutes =
                Some(Self::parse_u64("ROOMBOOK_RESET_CODE_TTL_MINUTES", &val)?);
        }

        if let Ok(val) = env::var("ROOMBOOK_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse_output_format(&val)?);
        }

        Self::apply_admin_overrides(config);
        Ok(())
    }

    fn apply_admin_overrides(config: &mut Config) {
        let email = env::var("ROOMBOOK_ADMIN_EMAIL").ok();
        let full_name = env::var("ROOMBOOK_ADMIN_FULL_NAME").ok();
        let password = env::var("ROOMBOOK_ADMIN_PASSWORD").ok();
        if email.is_none() && full_name.is_none() && password.is_none() {
            return;
        }

        let admin = config.admin.get_or_insert_with(Default::default);
        if email.is_some() {
            admin.email = email;
        }
        if full_name.is_some() {
            admin.full_name = full_name;
        }
        if password.is_some() {
            admin.password = password;
        }
    }

    fn parse_u64(field: &str, s: &str) -> Result<u64> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }

    /// Parse an output format name (case-insensitive).
    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(Error::Validation {
                field: "ROOMBOOK_OUTPUT_FORMAT".into(),
                message: format!("Invalid output format: '{s}' (expected table/json/csv/tsv)"),
            }),
        }
    }
}
