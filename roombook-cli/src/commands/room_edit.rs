//! Room-edit command implementation.
//!
//! Administrators can replace a room's image and video links; nothing else
//! about a room changes after it is seeded.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, require_admin, GlobalOptions};
use clap::Args;

/// Change a room's image or video (administrators only).
#[derive(Args)]
pub struct RoomEditCommand {
    /// Room id
    #[arg(value_name = "ROOM_ID")]
    pub room: String,

    /// New image URL
    #[arg(long, value_name = "URL")]
    pub image: String,

    /// New video URL (omit to clear)
    #[arg(long, value_name = "URL")]
    pub video: Option<String>,

    /// Administrator username
    #[arg(long, default_value = "admin")]
    pub admin_user: String,

    /// Administrator password
    #[arg(long, env = "ROOMBOOK_ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,
}

impl RoomEditCommand {
    /// Execute the room-edit command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.image.trim().is_empty() {
            return Err(CliError::InvalidArguments(
                "--image must not be empty".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        require_admin(&db, &self.admin_user, &self.admin_password)?;

        let room = db.update_room_media(&self.room, self.image.trim(), self.video.as_deref())?;

        if !global.quiet {
            println!("Updated {room}");
        }
        Ok(())
    }
}
