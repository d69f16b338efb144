//! Configuration schema definitions.
//!
//! This module defines the configuration structure for roombook: store lock
//! timeout, reset-code lifetime, the seeded administrator and the default
//! listing format.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::{AdminSeed, DatabaseConfig};

/// Default busy timeout when none is configured.
pub const DEFAULT_BUSY_TIMEOUT_SECONDS: u64 = 5;

/// Default reset-code lifetime when none is configured.
pub const DEFAULT_RESET_CODE_TTL_MINUTES: u64 = 60;

/// Longest accepted reset-code lifetime (one week).
pub const MAX_RESET_CODE_TTL_MINUTES: u64 = 7 * 24 * 60;

/// Complete configuration structure.
///
/// Every field is optional so sources can be layered; unset fields fall
/// back to defaults when the configuration is applied.
///
/// # Examples
///
/// ```
/// use roombook::config::{AdminConfig, Config};
///
/// let config = Config {
///     reset_code_ttl_minutes: Some(15),
///     admin: Some(AdminConfig {
///         email: Some("root@corp.test".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.reset_code_ttl().as_secs(), 900);
/// assert_eq!(config.admin_seed().email, "root@corp.test");
/// assert_eq!(config.admin_seed().full_name, "System Administrator");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum time to wait for the store's write lock (seconds).
    pub busy_timeout_seconds: Option<u64>,

    /// How long an issued password reset code stays valid (minutes).
    pub reset_code_ttl_minutes: Option<u64>,

    /// Administrator account seeded into a fresh store.
    pub admin: Option<AdminConfig>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

/// Administrator seed settings.
///
/// The username is always `admin`.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Administrator email.
    pub email: Option<String>,
    /// Administrator display name.
    pub full_name: Option<String>,
    /// Initial administrator password.
    pub password: Option<String>,
}

/// Output format for reservation listings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable table.
    #[default]
    Table,
    /// JSON array.
    Json,
    /// Comma-separated values with a header row.
    Csv,
    /// Tab-separated values with a header row.
    Tsv,
}

impl Config {
    /// Returns the configured busy timeout or the default.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(
            self.busy_timeout_seconds
                .unwrap_or(DEFAULT_BUSY_TIMEOUT_SECONDS),
        )
    }

    /// Returns the configured reset-code lifetime or the default.
    #[must_use]
    pub fn reset_code_ttl(&self) -> Duration {
        Duration::from_secs(
            self.reset_code_ttl_minutes
                .unwrap_or(DEFAULT_RESET_CODE_TTL_MINUTES)
                .saturating_mul(60),
        )
    }

    /// Returns the administrator seed with unset fields defaulted.
    #[must_use]
    pub fn admin_seed(&self) -> AdminSeed {
        let defaults = AdminSeed::default();
        let Some(admin) = &self.admin else {
            return defaults;
        };
        AdminSeed {
            email: admin.email.clone().unwrap_or(defaults.email),
            full_name: admin.full_name.clone().unwrap_or(defaults.full_name),
            password: admin.password.clone().unwrap_or(defaults.password),
        }
    }

    /// Builds the store configuration for the database at `path`.
    #[must_use]
    pub fn database_config(&self, path: impl AsRef<Path>) -> DatabaseConfig {
        DatabaseConfig::new(path)
            .with_busy_timeout(self.busy_timeout())
            .with_reset_code_ttl(self.reset_code_ttl())
            .with_admin(self.admin_seed())
    }
}
