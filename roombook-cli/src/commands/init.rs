//! Init command implementation.
//!
//! This module implements the `init` command for explicitly creating the
//! data directory and bootstrapping the store. Every other command
//! bootstraps on demand, so running `init` first is optional.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_data_dir, GlobalOptions};
use clap::Args;
use roombook::config::{
    Config, OutputFormat, CONFIG_FILE_NAME, DEFAULT_BUSY_TIMEOUT_SECONDS,
    DEFAULT_RESET_CODE_TTL_MINUTES,
};
use roombook::database::DATABASE_FILE_NAME;
use roombook::Database;
use std::fs;
use std::path::Path;

/// Create the data directory and bootstrap the store.
#[derive(Args)]
pub struct InitCommand {
    /// Create a default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;
        let db_path = data_dir.join(DATABASE_FILE_NAME);
        let config_path = data_dir.join(CONFIG_FILE_NAME);

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize roombook in: {}", data_dir.display());

            if data_dir.exists() {
                println!("  - Data directory already exists: {}", data_dir.display());
            } else {
                println!("  - Create data directory: {}", data_dir.display());
            }

            if db_path.exists() {
                println!("  - Upgrade existing database if needed: {}", db_path.display());
            } else {
                println!("  - Create and seed database: {}", db_path.display());
            }

            if self.with_config {
                if config_path.exists() {
                    println!(
                        "  - Configuration file already exists (will not overwrite): {}",
                        config_path.display()
                    );
                } else {
                    println!("  - Create configuration file: {}", config_path.display());
                }
            }

            return Ok(());
        }

        let data_dir_created = !data_dir.exists();
        let database_created = !db_path.exists();
        fs::create_dir_all(&data_dir)?;

        let config_created = self.with_config && !config_path.exists();
        if config_created {
            write_default_config(&config_path)?;
        }

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let rooms = Database::list_rooms(db.connection())?;

        println!("Initialized roombook in: {}", data_dir.display());
        if data_dir_created {
            println!("  - Created data directory");
        }
        if database_created {
            println!("  - Created database with {} rooms", rooms.len());
        } else {
            println!("  - Database already present");
        }
        println!("  - Schema version {}", db.schema_version()?);
        if config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}

fn write_default_config(path: &Path) -> Result<(), CliError> {
    let defaults = Config {
        busy_timeout_seconds: Some(DEFAULT_BUSY_TIMEOUT_SECONDS),
        reset_code_ttl_minutes: Some(DEFAULT_RESET_CODE_TTL_MINUTES),
        admin: None,
        output_format: Some(OutputFormat::Table),
    };
    let yaml = serde_yaml::to_string(&defaults).map_err(roombook::Error::from)?;
    fs::write(path, yaml)?;
    Ok(())
}
