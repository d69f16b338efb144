//! Login command implementation.
//!
//! Checks a username/password pair and prints the account. There are no
//! sessions; commands that need privileges take credentials themselves.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};
use clap::Args;

/// Check a username and password.
#[derive(Args)]
pub struct LoginCommand {
    /// Username
    #[arg(long)]
    pub username: String,

    /// Password
    #[arg(long, env = "ROOMBOOK_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Print the account as JSON
    #[arg(long)]
    pub json: bool,
}

impl LoginCommand {
    /// Execute the login command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let user = db.login(&self.username, &self.password)?;

        if self.json {
            print_json(&user)?;
        } else if !global.quiet {
            let role = if user.is_admin() { " (admin)" } else { "" };
            println!("Welcome, {}{role}", user.full_name());
        }
        Ok(())
    }
}
