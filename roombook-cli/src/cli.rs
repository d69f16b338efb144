//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookCommand, CancelCommand, CompletionsCommand, InitCommand, ListCommand, LoginCommand,
    RegisterCommand, ResetCommand, RoomEditCommand, RoomsCommand, ShowDataDirCommand,
    StatusCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use roombook::config::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for booking shared meeting rooms.
#[derive(Parser)]
#[command(name = "roombook")]
#[command(version, about = "Book shared meeting rooms", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ROOMBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "ROOMBOOK_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the data directory and bootstrap the store
    Init(InitCommand),

    /// List the room catalog
    Rooms(RoomsCommand),

    /// Change a room's image or video (administrators only)
    RoomEdit(RoomEditCommand),

    /// Create a user account
    Register(RegisterCommand),

    /// Check a username and password
    Login(LoginCommand),

    /// Reset a forgotten password with a one-time code
    #[command(subcommand)]
    Reset(ResetCommand),

    /// Book a room for a time interval
    Book(BookCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// List reservations
    List(ListCommand),

    /// Show the current and next meeting for a room
    Status(StatusCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// Output format for listings.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Aligned table (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Tsv => OutputFormat::Tsv,
        }
    }
}
