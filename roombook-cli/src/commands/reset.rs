//! Reset command implementation.
//!
//! The two halves of a password reset run as separate invocations:
//! `reset request` issues a code (printed, since no mail is sent) and
//! `reset confirm` checks it and sets the new password. A code is valid
//! for the configured lifetime and is consumed on success.

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, GlobalOptions};
use clap::{Args, Subcommand};
use roombook::Database;

/// Reset a forgotten password with a one-time code.
#[derive(Subcommand)]
pub enum ResetCommand {
    /// Issue a reset code for an account email
    Request(RequestArgs),

    /// Check the code and set a new password
    Confirm(ConfirmArgs),
}

/// Arguments for `reset request`.
#[derive(Args)]
pub struct RequestArgs {
    /// Account email
    #[arg(long)]
    pub email: String,
}

/// Arguments for `reset confirm`.
#[derive(Args)]
pub struct ConfirmArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Code printed by `reset request`
    #[arg(long)]
    pub code: String,

    /// New password
    #[arg(long, env = "ROOMBOOK_NEW_PASSWORD", hide_env_values = true)]
    pub new_password: String,
}

impl ResetCommand {
    /// Execute the reset command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        match self {
            ResetCommand::Request(args) => {
                let issued = db.issue_reset_code(args.email.trim())?;
                // The code is the command's output; the expiry is commentary
                println!("{}", issued.code());
                if !global.quiet {
                    eprintln!("Code valid until {} UTC", format_timestamp(issued.expiry()));
                }
            }
            ResetCommand::Confirm(args) => {
                let email = args.email.trim();
                let code = args.code.trim();
                Database::verify_reset_code(db.connection(), email, code)?;
                db.complete_password_reset(email, code, &args.new_password)?;
                if !global.quiet {
                    println!("Password updated");
                }
            }
        }
        Ok(())
    }
}
