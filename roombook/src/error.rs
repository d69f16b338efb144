//! Error types for the roombook library.
//!
//! This module provides the error hierarchy for all engine operations,
//! using `thiserror` for ergonomic error handling. Every variant is a
//! recoverable value handed back to the caller; the engine never retries.

use thiserror::Error;

/// Result type alias for operations that may fail with a roombook error.
///
/// # Examples
///
/// ```
/// use roombook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roombook library.
#[derive(Debug, Error)]
pub enum Error {
    /// A user with this username already exists.
    #[error("Username already exists: {username}")]
    DuplicateUsername {
        /// The username that was taken.
        username: String,
    },

    /// A user with this email already exists.
    #[error("Email already exists: {email}")]
    DuplicateEmail {
        /// The email that was taken.
        email: String,
    },

    /// The username/password pair did not match a stored account.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No user matched the lookup.
    #[error("User not found: {key}")]
    UserNotFound {
        /// The username or email that was looked up.
        key: String,
    },

    /// No room matched the lookup.
    #[error("Room not found: {id}")]
    RoomNotFound {
        /// The room id that was looked up.
        id: String,
    },

    /// The reset code is missing, wrong, or past its expiry.
    #[error("Invalid or expired code")]
    InvalidOrExpiredCode,

    /// The requested interval overlaps an existing reservation for the room.
    #[error("{details}")]
    BookingConflict {
        /// Message shown to the person booking.
        details: String,
        /// Id of the first reservation found to overlap.
        conflicting_id: String,
    },

    /// The reservation interval is empty or inverted.
    #[error("invalid interval: start {start} must be before end {end}")]
    InvalidInterval {
        /// Requested start, RFC 3339.
        start: String,
        /// Requested end, RFC 3339.
        end: String,
    },

    /// The attendee count is zero or exceeds the room capacity.
    #[error("attendees must be between 1 and {capacity}, got {attendees}")]
    CapacityExceeded {
        /// Requested attendee count.
        attendees: u32,
        /// Capacity of the room.
        capacity: u32,
    },

    /// The underlying store could not complete the operation.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    /// A password reset step was invoked out of order.
    #[error("password reset is {actual}, expected {expected}")]
    InvalidResetState {
        /// The state the operation requires.
        expected: String,
        /// The state the workflow is in.
        actual: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected at most {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The newest schema version this client knows.
        expected: u32,
        /// The schema version found in the store.
        found: u32,
    },

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Message shown when a booking overlaps an existing reservation.
    pub const CONFLICT_MESSAGE: &'static str = "Time slot is already booked";

    /// Check if the error was caused by the caller's input rather than the store.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::Error;
    ///
    /// assert!(Error::InvalidCredentials.is_user_facing());
    /// assert!(!Error::PasswordHash("rng".into()).is_user_facing());
    /// ```
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Self::StorageUnavailable(_)
                | Self::UnsupportedSchemaVersion { .. }
                | Self::PasswordHash(_)
                | Self::Configuration(_)
                | Self::Io(_)
        )
    }

    /// Check if the error means the store was locked past the busy timeout.
    #[must_use]
    pub fn is_lock_timeout(&self) -> bool {
        match self {
            Self::StorageUnavailable(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}
