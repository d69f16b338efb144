//! Rooms command implementation.
//!
//! Prints the room catalog in table, JSON, CSV or TSV form.

use crate::cli::FormatArg;
use crate::error::CliError;
use crate::utils::{
    effective_format, load_configuration, open_database, print_json, GlobalOptions,
};
use clap::Args;
use roombook::config::OutputFormat;
use roombook::{Database, Room};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 6] = ["id", "name", "capacity", "equipment", "image", "video"];

/// List the room catalog.
#[derive(Args)]
pub struct RoomsCommand {
    /// Output format (defaults to the configured format, then table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let rooms = Database::list_rooms(db.connection())?;

        match effective_format(self.format.map(Into::into), &config) {
            OutputFormat::Table => format_as_table(&rooms),
            OutputFormat::Json => print_json(&rooms),
            OutputFormat::Csv => format_as_delimited(&rooms, b','),
            OutputFormat::Tsv => format_as_delimited(&rooms, b'\t'),
        }
    }
}

fn equipment_list(room: &Room) -> String {
    room.equipment()
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_as_table(rooms: &[Room]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "{:<4} {:<10} {:>8}  EQUIPMENT", "ID", "NAME", "CAPACITY")?;
    for room in rooms {
        writeln!(
            handle,
            "{:<4} {:<10} {:>8}  {}",
            room.id(),
            room.name(),
            room.capacity(),
            equipment_list(room)
        )?;
    }
    Ok(())
}

fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

fn format_as_delimited(rooms: &[Room], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(stdout.lock());

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for room in rooms {
        writer
            .write_record([
                room.id().to_string(),
                room.name().to_string(),
                room.capacity().to_string(),
                equipment_list(room),
                room.image().to_string(),
                room.video().unwrap_or("").to_string(),
            ])
            .map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}
