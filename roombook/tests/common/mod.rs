//! Common test utilities for integration tests.
//!
//! Provides an isolated on-disk store per test plus small fixtures for
//! accounts and bookings.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use roombook::database::{Database, DatabaseConfig};
use roombook::{NewReservation, NewUser, Reservation, Result};

/// A store file inside a temporary directory.
///
/// Several handles can be opened on the same file, which is how concurrent
/// callers are modelled.
pub struct TestStore {
    _dir: TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    /// Creates an empty temporary directory; the store is created on first open.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roombook.db");
        Self { _dir: dir, path }
    }

    /// Returns the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a default configuration for this store.
    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.path)
    }

    /// Opens a new handle with the default configuration.
    pub fn open(&self) -> Database {
        Database::open(self.config()).unwrap()
    }
}

/// A fixed instant on 2025-03-03 (a Monday), UTC.
#[allow(dead_code)]
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, hour, minute, 0).unwrap()
}

/// Registers a user whose password is `"password"`.
#[allow(dead_code)]
pub fn register(db: &mut Database, username: &str, email: &str) {
    let user = NewUser::new(username, "password", email, username).unwrap();
    db.register(&user).unwrap();
}

/// Books `attendees` people into a stored room.
#[allow(dead_code)]
pub fn book(
    db: &mut Database,
    room_id: &str,
    user_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    attendees: u32,
) -> Result<Reservation> {
    let room = Database::get_room(db.connection(), room_id)
        .unwrap()
        .unwrap();
    let request = NewReservation::builder(&room, user_id, start, end)
        .title("integration meeting")
        .attendees(attendees)
        .build()?;
    db.book(&request)
}
