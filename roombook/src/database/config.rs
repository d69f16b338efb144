//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution, lock timeouts, the reset-code lifetime and
//! the administrator account seeded on first open.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Name of the database file inside the data directory.
pub const DATABASE_FILE_NAME: &str = "roombook.db";

/// The administrator account created when a store is first bootstrapped.
///
/// The username is always `admin`; the remaining fields are configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSeed {
    /// Email of the administrator.
    pub email: String,
    /// Display name of the administrator.
    pub full_name: String,
    /// Initial password, hashed before it is stored.
    pub password: String,
}

impl AdminSeed {
    /// Username of the seeded administrator.
    pub const USERNAME: &'static str = "admin";
}

impl Default for AdminSeed {
    fn default() -> Self {
        Self {
            email: "admin@utopia.com".to_string(),
            full_name: "System Administrator".to_string(),
            password: "12345678".to_string(),
        }
    }
}

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use roombook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/roombook.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// assert_eq!(config.reset_code_ttl, Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
    /// How long an issued reset code stays valid.
    pub reset_code_ttl: Duration,
    /// Administrator account seeded by the bootstrap migration.
    pub admin: AdminSeed,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    /// - `reset_code_ttl`: one hour
    /// - `admin`: [`AdminSeed::default`]
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
            reset_code_ttl: Duration::from_secs(60 * 60),
            admin: AdminSeed::default(),
        }
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the database connection will
    /// wait when encountering a locked database before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets how long reset codes stay valid.
    #[must_use]
    pub fn with_reset_code_ttl(mut self, ttl: Duration) -> Self {
        self.reset_code_ttl = ttl;
        self
    }

    /// Sets the administrator account seeded into a fresh store.
    #[must_use]
    pub fn with_admin(mut self, admin: AdminSeed) -> Self {
        self.admin = admin;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory for roombook.
///
/// The default directory is `~/.roombook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".roombook"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves the data directory using the environment or the default.
///
/// The resolution order is:
/// 1. `$ROOMBOOK_DATA_DIR` if set
/// 2. `~/.roombook` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `ROOMBOOK_DATA_DIR` is not set.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var("ROOMBOOK_DATA_DIR") {
        Ok(data_dir) => Ok(PathBuf::from(data_dir)),
        Err(_) => default_data_dir(),
    }
}

/// Resolves the database path inside [`resolve_data_dir`].
///
/// # Errors
///
/// See [`resolve_data_dir`].
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir()?.join(DATABASE_FILE_NAME))
}
