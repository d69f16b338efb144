//! Status command implementation.
//!
//! Shows what a room is doing at an instant: the meeting in progress, if
//! any, and the next one to start.

use crate::error::CliError;
use crate::utils::{
    format_timestamp, load_configuration, open_database, parse_time, print_json, GlobalOptions,
};
use chrono::Utc;
use clap::Args;
use roombook::{Database, Reservation};

/// Show the current and next meeting for a room.
#[derive(Args)]
pub struct StatusCommand {
    /// Room id
    #[arg(value_name = "ROOM_ID")]
    pub room: String,

    /// Instant to report on (defaults to now)
    #[arg(long, value_name = "TIME")]
    pub at: Option<String>,

    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let now = match self.at {
            Some(ref value) => parse_time(value)?,
            None => Utc::now(),
        };

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let status = Database::room_status(db.connection(), &self.room, now)?;

        if self.json {
            return print_json(&status);
        }

        match status.current {
            Some(ref current) => println!("Now:  {}", describe(current)),
            None => println!("Now:  available"),
        }
        match status.next {
            Some(ref next) => println!("Next: {}", describe(next)),
            None => println!("Next: nothing scheduled"),
        }
        Ok(())
    }
}

fn describe(reservation: &Reservation) -> String {
    let title = if reservation.title().is_empty() {
        "(untitled)"
    } else {
        reservation.title()
    };
    format!(
        "{} {}-{} ({}, {} attendees)",
        title,
        format_timestamp(reservation.start_time()),
        reservation.end_time().format("%H:%M"),
        reservation.organizer(),
        reservation.attendees()
    )
}
