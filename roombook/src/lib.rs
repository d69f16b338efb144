#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roombook
//!
//! A library for booking shared meeting rooms.
//!
//! The engine keeps rooms, user accounts, password reset codes and
//! reservations in a SQLite store. It guarantees that reservations for the
//! same room never overlap, that usernames and emails stay unique, and that
//! reset codes expire.
//!
//! ## Core Types
//!
//! - [`Database`] and [`DatabaseConfig`]: the store and its bootstrap
//! - [`Room`], [`User`], [`Reservation`]: stored records
//! - [`NewUser`] and [`NewReservation`]: validated write requests
//! - [`TimeSlot`]: half-open booking intervals
//! - [`PasswordReset`]: the reset-code workflow
//! - [`RoomStatus`]: current and next meeting for a room
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use roombook::TimeSlot;
//!
//! let at = |h| Utc.with_ymd_and_hms(2025, 3, 3, h, 0, 0).unwrap();
//! let morning = TimeSlot::new(at(9), at(10)).unwrap();
//! let next = TimeSlot::new(at(10), at(11)).unwrap();
//!
//! // Touching slots do not overlap
//! assert!(!morning.overlaps(&next));
//! assert!(TimeSlot::new(at(10), at(9)).is_err());
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod password;
pub mod reservation;
pub mod reset;
pub mod room;
pub mod status;
pub mod user;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{NewReservation, Reservation, TimeSlot};
pub use reset::{PasswordReset, ResetCode, ResetState};
pub use room::Room;
pub use status::RoomStatus;
pub use user::{NewUser, User};
