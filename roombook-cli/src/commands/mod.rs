//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory and bootstrap the store
//! - `rooms`: List the room catalog
//! - `room_edit`: Change a room's media (administrators only)
//! - `register`: Create a user account
//! - `login`: Check credentials
//! - `reset`: Request and confirm a password reset code
//! - `book`: Book a room
//! - `cancel`: Cancel a reservation
//! - `list`: List reservations
//! - `status`: Current and next meeting for a room
//! - `show_data_dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod cancel;
pub mod completions;
pub mod init;
pub mod list;
pub mod login;
pub mod register;
pub mod reset;
pub mod room_edit;
pub mod rooms;
pub mod show_data_dir;
pub mod status;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use login::LoginCommand;
pub use register::RegisterCommand;
pub use reset::ResetCommand;
pub use room_edit::RoomEditCommand;
pub use rooms::RoomsCommand;
pub use show_data_dir::ShowDataDirCommand;
pub use status::StatusCommand;
