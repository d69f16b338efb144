//! Shared test utilities for database unit tests.

use chrono::{DateTime, Utc};
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::error::Result;
use crate::{NewReservation, NewUser, Reservation};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Registers a user whose password is `"password"`.
///
/// # Panics
///
/// Panics if registration fails.
pub fn register_test_user(db: &mut Database, username: &str, email: &str) {
    let user = NewUser::new(username, "password", email, username).unwrap();
    db.register(&user).unwrap();
}

/// Books a one-attendee slot in a stored room.
///
/// # Panics
///
/// Panics if the room does not exist or the interval is invalid.
///
/// # Errors
///
/// Returns whatever [`Database::book`] returns.
pub fn book_test_slot(
    db: &mut Database,
    room_id: &str,
    user_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Reservation> {
    let room = Database::get_room(db.connection(), room_id)
        .unwrap()
        .unwrap();
    let request = NewReservation::builder(&room, user_id, start, end)
        .title("test meeting")
        .build()
        .unwrap();
    db.book(&request)
}
