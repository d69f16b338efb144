//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and statements
//! shared between the migration steps and the repositories.

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs, most importantly the schema
/// version the migration runner compares against.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to create the users table.
///
/// `username` is the primary identity; `email` is a unique secondary key.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        username TEXT PRIMARY KEY NOT NULL,
        password_hash TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        full_name TEXT NOT NULL,
        is_admin INTEGER NOT NULL DEFAULT 0
    )";

/// SQL statement to create the reservations table.
///
/// Times are Unix epoch seconds. Room and user references reject deletion
/// of a referenced row.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id TEXT PRIMARY KEY NOT NULL,
        room_id TEXT NOT NULL REFERENCES rooms(id) ON DELETE RESTRICT,
        user_id TEXT NOT NULL REFERENCES users(username) ON DELETE RESTRICT,
        title TEXT NOT NULL,
        organizer TEXT NOT NULL,
        start_time INTEGER NOT NULL,
        end_time INTEGER NOT NULL,
        attendees INTEGER NOT NULL,
        CHECK (start_time < end_time),
        CHECK (attendees >= 1)
    )";

/// Index backing the room-scoped conflict scan.
pub const CREATE_RESERVATIONS_ROOM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_room_id ON reservations(room_id)";

/// Index backing per-user listings.
pub const CREATE_RESERVATIONS_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_user_id ON reservations(user_id)";

/// Index backing chronological listings.
pub const CREATE_RESERVATIONS_START_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_start_time ON reservations(start_time)";

/// SQL statement to create the rooms table.
///
/// Equipment is stored as a JSON array of strings.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        capacity INTEGER NOT NULL CHECK (capacity > 0),
        equipment TEXT NOT NULL DEFAULT '[]',
        image TEXT NOT NULL,
        video TEXT
    )";

/// SQL statement to create the reset codes table.
///
/// One outstanding code per email; a new request replaces the row.
pub const CREATE_RESET_CODES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reset_codes (
        email TEXT PRIMARY KEY NOT NULL,
        code TEXT NOT NULL,
        expiry INTEGER NOT NULL
    )";

/// Index on reset codes.
pub const CREATE_RESET_CODES_CODE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reset_codes_code ON reset_codes(code)";

/// Index on reset code expiry.
pub const CREATE_RESET_CODES_EXPIRY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reset_codes_expiry ON reset_codes(expiry)";

/// SQL statement to insert or replace a room.
pub const UPSERT_ROOM: &str = r"
    INSERT INTO rooms (id, name, capacity, equipment, image, video)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        capacity = excluded.capacity,
        equipment = excluded.equipment,
        image = excluded.image,
        video = excluded.video
";

/// SQL statement to insert a user.
pub const INSERT_USER: &str = r"
    INSERT INTO users (username, password_hash, email, full_name, is_admin)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

/// Column list shared by the user queries.
pub const USER_COLUMNS: &str = "username, password_hash, email, full_name, is_admin";

/// Column list shared by the reservation queries.
pub const RESERVATION_COLUMNS: &str =
    "id, room_id, user_id, title, organizer, start_time, end_time, attendees";
