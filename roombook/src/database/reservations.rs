//! Reservation repository and the conflict-checked booking path.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::reservation::{check_attendees, TimeSlot};
use crate::{NewReservation, Reservation, RoomStatus};

use super::connection::Database;
use super::schema::RESERVATION_COLUMNS;

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (id, room_id, user_id, title, organizer, start_time, end_time, attendees)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
";

const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";

/// Converts a timestamp to Unix epoch seconds for storage.
pub(super) fn to_unix_secs(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}

/// Converts stored Unix epoch seconds back to a timestamp.
pub(super) fn from_unix_secs(secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(0, secs))
}

/// Deserializes a reservation from a row in [`RESERVATION_COLUMNS`] order.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let start = from_unix_secs(row.get(5)?)?;
    let end = from_unix_secs(row.get(6)?)?;
    let slot = TimeSlot::new(start, end).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Integer, Box::new(e))
    })?;

    Ok(Reservation::from_parts(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        slot,
        row.get(7)?,
    ))
}

fn query_reservations(
    conn: &Connection,
    filter: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Reservation>> {
    let sql = format!(
        "SELECT {RESERVATION_COLUMNS} FROM reservations {filter} ORDER BY start_time, id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let reservations = stmt
        .query_map(params, row_to_reservation)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(reservations)
}

impl Database {
    /// Books a room, refusing any overlap with its existing reservations.
    ///
    /// Inside one IMMEDIATE transaction this checks that the room and the
    /// user exist, re-checks the attendee count against the stored room,
    /// scans the room's reservations for an overlapping `[start, end)`
    /// interval and inserts under a fresh UUID. Touching intervals do not
    /// overlap.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::RoomNotFound`] / [`Error::UserNotFound`] for unknown references
    /// - [`Error::CapacityExceeded`] if the attendees do not fit the room
    /// - [`Error::BookingConflict`] if the slot is taken
    ///
    /// A failed booking writes nothing.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::{TimeZone, Utc};
    /// use roombook::database::{Database, DatabaseConfig};
    /// use roombook::NewReservation;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/roombook.db")).unwrap();
    /// let room = Database::get_room(db.connection(), "2").unwrap().unwrap();
    /// let start = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
    ///
    /// let request = NewReservation::builder(&room, "admin", start, end)
    ///     .title("Standup")
    ///     .build()
    ///     .unwrap();
    /// let booked = db.book(&request).unwrap();
    /// println!("booked {}", booked.id());
    /// ```
    pub fn book(&mut self, request: &NewReservation) -> Result<Reservation> {
        request.check_capacity()?;

        let tx = self.begin_transaction()?;
        let room = Self::get_room(&tx, request.room_id())?.ok_or_else(|| Error::RoomNotFound {
            id: request.room_id().to_string(),
        })?;
        check_attendees(request.attendees(), room.capacity())?;
        if Self::find_user(&tx, request.user_id())?.is_none() {
            return Err(Error::UserNotFound {
                key: request.user_id().to_string(),
            });
        }

        let slot = request.slot();
        if let Some(existing) = Self::list_reservations_by_room(&tx, room.id())?
            .into_iter()
            .find(|existing| existing.slot().overlaps(&slot))
        {
            log::debug!(
                "booking {} in room {} conflicts with {}",
                slot,
                room.id(),
                existing.id()
            );
            return Err(Error::BookingConflict {
                details: Error::CONFLICT_MESSAGE.to_string(),
                conflicting_id: existing.id().to_string(),
            });
        }

        let reservation = Reservation::from_request(Uuid::new_v4().to_string(), request);
        tx.execute(
            INSERT_RESERVATION,
            params![
                reservation.id(),
                reservation.room_id(),
                reservation.user_id(),
                reservation.title(),
                reservation.organizer(),
                to_unix_secs(reservation.start_time()),
                to_unix_secs(reservation.end_time()),
                reservation.attendees(),
            ],
        )?;
        tx.commit()?;

        log::info!(
            "booked room {} for {} ({})",
            reservation.room_id(),
            reservation.slot(),
            reservation.id()
        );
        Ok(reservation)
    }

    /// Looks up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation(conn: &Connection, id: &str) -> Result<Option<Reservation>> {
        let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = ?");
        Ok(conn.query_row(&sql, [id], row_to_reservation).optional()?)
    }

    /// Lists every reservation, ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        query_reservations(conn, "", [])
    }

    /// Lists a room's reservations, ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations_by_room(conn: &Connection, room_id: &str) -> Result<Vec<Reservation>> {
        query_reservations(conn, "WHERE room_id = ?", [room_id])
    }

    /// Lists a user's reservations, ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations_by_user(conn: &Connection, user_id: &str) -> Result<Vec<Reservation>> {
        query_reservations(conn, "WHERE user_id = ?", [user_id])
    }

    /// Cancels a reservation.
    ///
    /// Cancelling twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation existed and was deleted
    /// - `Ok(false)` if there was nothing to delete
    pub fn cancel_reservation(&mut self, id: &str) -> Result<bool> {
        let tx = self.begin_transaction()?;
        let deleted = tx.execute(DELETE_RESERVATION, [id])?;
        tx.commit()?;

        if deleted > 0 {
            log::info!("cancelled reservation {id}");
        }
        Ok(deleted > 0)
    }

    /// Reports the meeting in progress and the next one for a room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`] for an unknown room.
    pub fn room_status(conn: &Connection, room_id: &str, now: DateTime<Utc>) -> Result<RoomStatus> {
        if Self::get_room(conn, room_id)?.is_none() {
            return Err(Error::RoomNotFound {
                id: room_id.to_string(),
            });
        }
        let reservations = Self::list_reservations_by_room(conn, room_id)?;
        Ok(RoomStatus::at(&reservations, now))
    }
}
