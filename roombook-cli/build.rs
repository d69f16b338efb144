//! Build script for roombook-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("roombook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book shared meeting rooms")
        .long_about(
            "Command-line tool for booking shared meeting rooms without double-booking",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("ROOMBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("ROOMBOOK_BUSY_TIMEOUT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Create the data directory and bootstrap the store")
                .long_about("Create the data directory, the database and optionally a config file"),
            Command::new("rooms")
                .about("List the room catalog")
                .long_about("Display every room with its capacity and equipment"),
            Command::new("room-edit")
                .about("Change a room's image or video (administrators only)")
                .long_about("Replace a room's media links; requires administrator credentials"),
            Command::new("register")
                .about("Create a user account")
                .long_about("Register a user with a unique username and email"),
            Command::new("login")
                .about("Check a username and password")
                .long_about("Verify credentials and print the account"),
            Command::new("reset")
                .about("Reset a forgotten password with a one-time code")
                .long_about("Request a reset code for an email, then confirm it with a new password")
                .subcommands(vec![
                    Command::new("request").about("Issue a reset code for an account email"),
                    Command::new("confirm").about("Check the code and set a new password"),
                ]),
            Command::new("book")
                .about("Book a room for a time interval")
                .long_about("Reserve a room; overlapping reservations for the same room are rejected"),
            Command::new("cancel")
                .about("Cancel a reservation")
                .long_about("Delete a reservation by id"),
            Command::new("list")
                .about("List reservations")
                .long_about("Display reservations, optionally filtered by room or user"),
            Command::new("status")
                .about("Show the current and next meeting for a room")
                .long_about("Display the meeting in progress and the next one for a room"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the roombook data directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("roombook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
