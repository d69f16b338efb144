//! What a room is doing right now, for wall displays.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Reservation;

/// The meeting in progress and the next one up for a single room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoomStatus {
    /// Reservation whose `[start, end)` contains the instant.
    pub current: Option<Reservation>,
    /// Earliest reservation starting strictly after the instant.
    pub next: Option<Reservation>,
}

impl RoomStatus {
    /// Derives the status from a room's reservations at `now`.
    ///
    /// The reservations may come in any order and must all belong to the
    /// same room.
    #[must_use]
    pub fn at(reservations: &[Reservation], now: DateTime<Utc>) -> Self {
        let current = reservations
            .iter()
            .find(|r| r.slot().contains(now))
            .cloned();
        let next = reservations
            .iter()
            .filter(|r| r.start_time() > now)
            .min_by_key(|r| r.start_time())
            .cloned();
        Self { current, next }
    }

    /// Whether the room is free at the instant.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.current.is_none()
    }
}
