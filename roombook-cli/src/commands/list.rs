//! List command implementation.
//!
//! This module implements the `list` command, which displays reservations
//! in various formats (table, JSON, CSV, TSV).

use crate::cli::FormatArg;
use crate::error::CliError;
use crate::utils::{
    effective_format, format_timestamp, load_configuration, open_database, print_json,
    GlobalOptions,
};
use clap::Args;
use roombook::config::OutputFormat;
use roombook::{Database, Reservation};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 8] = [
    "id",
    "room",
    "user",
    "title",
    "organizer",
    "start",
    "end",
    "attendees",
];

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (defaults to the configured format, then table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Only reservations for this room
    #[arg(long, value_name = "ROOM_ID")]
    pub room: Option<String>,

    /// Only reservations made by this user
    #[arg(long, value_name = "USERNAME")]
    pub user: Option<String>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Open database
        let db = open_database(global, &config)?;

        // 3. Query, using the narrowest index available
        let mut reservations = match (&self.room, &self.user) {
            (Some(room), _) => Database::list_reservations_by_room(db.connection(), room)?,
            (None, Some(user)) => Database::list_reservations_by_user(db.connection(), user)?,
            (None, None) => Database::list_reservations(db.connection())?,
        };

        // 4. Apply the remaining filter
        if let (Some(_), Some(user)) = (&self.room, &self.user) {
            reservations.retain(|r| r.user_id() == user);
        }

        // 5. Format and output to stdout
        match effective_format(self.format.map(Into::into), &config) {
            OutputFormat::Table => format_as_table(&reservations),
            OutputFormat::Json => format_as_json(&reservations),
            OutputFormat::Csv => format_as_delimited(&reservations, b','),
            OutputFormat::Tsv => format_as_delimited(&reservations, b'\t'),
        }
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for res in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            res.id(),
            res.room_id(),
            res.user_id(),
            if res.title().is_empty() { "-" } else { res.title() },
            res.organizer(),
            format_timestamp(res.start_time()),
            format_timestamp(res.end_time()),
            res.attendees(),
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[Reservation]) -> Result<(), CliError> {
    let json_data: Vec<serde_json::Value> = reservations
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id(),
                "room": r.room_id(),
                "user": r.user_id(),
                "title": r.title(),
                "organizer": r.organizer(),
                "start": r.start_time().to_rfc3339(),
                "end": r.end_time().to_rfc3339(),
                "attendees": r.attendees(),
            })
        })
        .collect();

    print_json(&json_data)
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(reservations: &[Reservation], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for res in reservations {
        writer
            .write_record([
                res.id().to_string(),
                res.room_id().to_string(),
                res.user_id().to_string(),
                res.title().to_string(),
                res.organizer().to_string(),
                res.start_time().to_rfc3339(),
                res.end_time().to_rfc3339(),
                res.attendees().to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
