//! Cancel command implementation.
//!
//! Cancelling is idempotent: an unknown id is reported but is not an error.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id (as printed by `book`)
    #[arg(value_name = "RESERVATION_ID")]
    pub id: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let deleted = db.cancel_reservation(&self.id)?;

        if !global.quiet {
            if deleted {
                println!("Cancelled reservation {}", self.id);
            } else {
                eprintln!("No reservation {}", self.id);
            }
        }
        Ok(())
    }
}
