//! Book command implementation.
//!
//! This module implements the `book` command. On success it prints the new
//! reservation id on stdout so scripts can capture it.

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, parse_time, GlobalOptions};
use clap::Args;
use roombook::{Database, Error, NewReservation};

/// Book a room for a time interval.
#[derive(Args)]
pub struct BookCommand {
    /// Room id
    #[arg(long)]
    pub room: String,

    /// Username of the person booking
    #[arg(long)]
    pub user: String,

    /// Start time (RFC 3339 or "YYYY-MM-DD HH:MM", UTC)
    #[arg(long)]
    pub start: String,

    /// End time (RFC 3339 or "YYYY-MM-DD HH:MM", UTC)
    #[arg(long)]
    pub end: String,

    /// Meeting title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Organizer (defaults to the booking user)
    #[arg(long)]
    pub organizer: Option<String>,

    /// Number of attendees
    #[arg(long, default_value_t = 1)]
    pub attendees: u32,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let start = parse_time(&self.start)?;
        let end = parse_time(&self.end)?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let room = Database::get_room(db.connection(), &self.room)?.ok_or_else(|| {
            Error::RoomNotFound {
                id: self.room.clone(),
            }
        })?;

        let mut builder = NewReservation::builder(&room, self.user, start, end)
            .title(self.title)
            .attendees(self.attendees);
        if let Some(organizer) = self.organizer {
            builder = builder.organizer(organizer);
        }
        let request = builder.build()?;

        let reservation = db.book(&request)?;

        println!("{}", reservation.id());
        if !global.quiet {
            eprintln!(
                "Booked {} from {} to {}",
                room,
                format_timestamp(reservation.start_time()),
                format_timestamp(reservation.end_time())
            );
        }
        Ok(())
    }
}
