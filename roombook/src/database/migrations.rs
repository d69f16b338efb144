//! Database schema management and migrations.
//!
//! Schema changes are an ordered list of additive steps. Each step carries
//! the version it brings the store to and is applied once, in its own
//! IMMEDIATE transaction that also records the new version.

use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::{Error, Result};
use crate::password::hash_password;
use crate::room::default_catalog;

use super::config::{AdminSeed, DatabaseConfig};
use super::connection::Database;
use super::schema::{
    CREATE_METADATA_TABLE, CREATE_RESERVATIONS_ROOM_INDEX, CREATE_RESERVATIONS_START_INDEX,
    CREATE_RESERVATIONS_TABLE, CREATE_RESERVATIONS_USER_INDEX, CREATE_RESET_CODES_CODE_INDEX,
    CREATE_RESET_CODES_EXPIRY_INDEX, CREATE_RESET_CODES_TABLE, CREATE_ROOMS_TABLE,
    CREATE_USERS_TABLE, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// One additive schema change.
struct Migration {
    version: u32,
    description: &'static str,
    apply: fn(&Connection, &DatabaseConfig) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "users and reservations",
        apply: create_users_and_reservations,
    },
    Migration {
        version: 2,
        description: "rooms and the default catalog",
        apply: create_rooms,
    },
    Migration {
        version: 3,
        description: "password reset codes",
        apply: create_reset_codes,
    },
    Migration {
        version: 4,
        description: "administrator account",
        apply: seed_admin,
    },
];

/// The schema version produced by the last migration step.
#[allow(clippy::cast_possible_truncation)]
pub const CURRENT_SCHEMA_VERSION: u32 = MIGRATIONS.len() as u32;

fn create_users_and_reservations(conn: &Connection, _config: &DatabaseConfig) -> Result<()> {
    conn.execute(CREATE_USERS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_ROOM_INDEX, [])?;
    conn.execute(CREATE_RESERVATIONS_USER_INDEX, [])?;
    conn.execute(CREATE_RESERVATIONS_START_INDEX, [])?;
    Ok(())
}

fn create_rooms(conn: &Connection, _config: &DatabaseConfig) -> Result<()> {
    conn.execute(CREATE_ROOMS_TABLE, [])?;
    for room in default_catalog() {
        Database::put_room_simple(conn, &room)?;
    }
    Ok(())
}

fn create_reset_codes(conn: &Connection, _config: &DatabaseConfig) -> Result<()> {
    conn.execute(CREATE_RESET_CODES_TABLE, [])?;
    conn.execute(CREATE_RESET_CODES_CODE_INDEX, [])?;
    conn.execute(CREATE_RESET_CODES_EXPIRY_INDEX, [])?;
    Ok(())
}

fn seed_admin(conn: &Connection, config: &DatabaseConfig) -> Result<()> {
    let AdminSeed {
        email,
        full_name,
        password,
    } = &config.admin;
    let hash = hash_password(password)?;

    let inserted = conn.execute(
        r"INSERT OR IGNORE INTO users (username, password_hash, email, full_name, is_admin)
          VALUES (?1, ?2, ?3, ?4, 1)",
        params![AdminSeed::USERNAME, hash, email, full_name],
    )?;
    if inserted == 0 {
        log::warn!(
            "administrator not seeded: username '{}' or email '{email}' already taken",
            AdminSeed::USERNAME
        );
    }
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than
/// "no rows returned" (which indicates version 0).
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
/// - `Err(_)` if a database error occurs
pub fn get_schema_version(conn: &Connection) -> Result<u32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value.parse::<u32>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            // "no such table" surfaces as a generic SQLITE_ERROR
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Applies every migration step the store has not seen yet.
///
/// Each step re-reads the stored version after taking the write lock, so
/// two processes bootstrapping the same file apply each step once.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] if the store was written by a
/// newer client, or a storage error if a step fails. A failed step is rolled
/// back and leaves the store at the previous version.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use roombook::database::DatabaseConfig;
/// use roombook::database::migrations::{run_migrations, CURRENT_SCHEMA_VERSION};
///
/// let mut conn = Connection::open_in_memory().unwrap();
/// let version = run_migrations(&mut conn, &DatabaseConfig::new(":memory:")).unwrap();
/// assert_eq!(version, CURRENT_SCHEMA_VERSION);
/// ```
pub fn run_migrations(conn: &mut Connection, config: &DatabaseConfig) -> Result<u32> {
    let initial = get_schema_version(conn)?;
    ensure_supported(initial)?;
    if initial == CURRENT_SCHEMA_VERSION {
        return Ok(CURRENT_SCHEMA_VERSION);
    }
    conn.execute(CREATE_METADATA_TABLE, [])?;

    for step in MIGRATIONS {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let stored = get_schema_version(&tx)?;
        ensure_supported(stored)?;
        if stored >= step.version {
            continue;
        }

        (step.apply)(&tx, config)?;
        tx.execute(INSERT_SCHEMA_VERSION, [step.version.to_string()])?;
        tx.commit()?;
        log::info!(
            "applied schema migration v{}: {}",
            step.version,
            step.description
        );
    }

    Ok(CURRENT_SCHEMA_VERSION)
}

/// Checks schema compatibility and migrates if needed.
///
/// Writable stores are brought up to [`CURRENT_SCHEMA_VERSION`]. A
/// read-only store cannot be migrated, so it must already be current.
///
/// # Errors
///
/// Returns an error if:
/// - The stored version is newer than this client
/// - A read-only store is older than this client
/// - A migration step fails
pub fn check_schema_compatibility(conn: &mut Connection, config: &DatabaseConfig) -> Result<()> {
    if !config.read_only {
        run_migrations(conn, config)?;
        return Ok(());
    }

    let version = get_schema_version(conn)?;
    ensure_supported(version)?;
    if version < CURRENT_SCHEMA_VERSION {
        return Err(Error::Validation {
            field: "schema_version".into(),
            message: format!(
                "Database schema version {version} is older than client version {CURRENT_SCHEMA_VERSION} and cannot be migrated read-only"
            ),
        });
    }
    Ok(())
}

fn ensure_supported(version: u32) -> Result<()> {
    if version > CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }
    Ok(())
}
