//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Account and booking fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared so the host cannot leak in.
const ROOMBOOK_ENV_VARS: &[&str] = &[
    "ROOMBOOK_DATA_DIR",
    "ROOMBOOK_BUSY_TIMEOUT",
    "ROOMBOOK_BUSY_TIMEOUT_SECONDS",
    "ROOMBOOK_RESET_CODE_TTL_MINUTES",
    "ROOMBOOK_OUTPUT_FORMAT",
    "ROOMBOOK_ADMIN_EMAIL",
    "ROOMBOOK_ADMIN_FULL_NAME",
    "ROOMBOOK_ADMIN_PASSWORD",
    "ROOMBOOK_PASSWORD",
    "ROOMBOOK_NEW_PASSWORD",
    "ROOMBOOK_LOG_MODE",
];

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory standing in for `$HOME`
/// - A separate data directory for the roombook store
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the roombook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created; roombook creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("roombook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder without `--data-dir`.
    ///
    /// `HOME` points into the temporary directory and every `ROOMBOOK_*`
    /// variable is removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");
        for var in ROOMBOOK_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path);
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Register a user whose password is `"password"`.
    pub fn register(&self, username: &str, email: &str) {
        self.command()
            .args(["register", "--username", username, "--email", email])
            .args(["--full-name", username, "--password", "password"])
            .assert()
            .success();
    }

    /// Book a room and return the reservation id.
    ///
    /// # Panics
    /// Panics if the book command fails.
    pub fn book(&self, room: &str, user: &str, start: &str, end: &str) -> String {
        let output = self
            .command()
            .args(["book", "--room", room, "--user", user])
            .args(["--start", start, "--end", end])
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// List reservations and return stdout.
    pub fn list(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("list")
            .args(args)
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
