//! Register command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use roombook::NewUser;

/// Create a user account.
#[derive(Args)]
pub struct RegisterCommand {
    /// Username (must be unique)
    #[arg(long)]
    pub username: String,

    /// Email address (must be unique)
    #[arg(long)]
    pub email: String,

    /// Display name
    #[arg(long)]
    pub full_name: String,

    /// Password
    #[arg(long, env = "ROOMBOOK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl RegisterCommand {
    /// Execute the register command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let new_user = NewUser::new(self.username, self.password, self.email, self.full_name)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let user = db.register(&new_user)?;

        if !global.quiet {
            println!("Registered {} <{}>", user.username(), user.email());
        }
        Ok(())
    }
}
