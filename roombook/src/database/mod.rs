//! Database layer for persistent storage of rooms, users, reset codes and
//! reservations.
//!
//! This module provides a SQLite-based storage layer: connection
//! management, a versioned migration runner that seeds the room catalog and
//! the administrator once, and the transactional operations that keep
//! bookings from overlapping and accounts unique.
//!
//! Writes take `&mut self` and run in IMMEDIATE transactions. Reads are
//! associated functions over a `&Connection` so they can run inside a
//! transaction too.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use roombook::database::{Database, DatabaseConfig};
//! use roombook::{NewReservation, NewUser};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/roombook.db")).unwrap();
//!
//! let alice = NewUser::new("alice", "s3cret", "a@x.com", "Alice").unwrap();
//! db.register(&alice).unwrap();
//!
//! let room = Database::get_room(db.connection(), "2").unwrap().unwrap();
//! let start = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
//! let request = NewReservation::builder(&room, "alice", start, end)
//!     .title("Planning")
//!     .build()
//!     .unwrap();
//! db.book(&request).unwrap();
//!
//! for reservation in Database::list_reservations_by_room(db.connection(), "2").unwrap() {
//!     println!("{}: {}", reservation.slot(), reservation.title());
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod reservations;
mod reset_codes;
mod rooms;
mod schema;
mod transaction;
mod users;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, AdminSeed, DatabaseConfig,
    DATABASE_FILE_NAME,
};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{
    check_schema_compatibility, get_schema_version, run_migrations, CURRENT_SCHEMA_VERSION,
};
