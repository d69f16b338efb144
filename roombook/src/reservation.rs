//! Reservation types for booking rooms over time intervals.
//!
//! This module provides the half-open [`TimeSlot`] with its overlap
//! predicate, the stored [`Reservation`] record, and the validating
//! [`NewReservationBuilder`] used to request a booking.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::Room;

/// A half-open time interval `[start, end)`.
///
/// Two slots that only share a boundary do not overlap, so bookings may
/// abut exactly.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use roombook::TimeSlot;
///
/// let at = |h, m| Utc.with_ymd_and_hms(2025, 3, 3, h, m, 0).unwrap();
/// let morning = TimeSlot::new(at(9, 0), at(10, 0)).unwrap();
/// let next = TimeSlot::new(at(10, 0), at(10, 30)).unwrap();
/// let inside = TimeSlot::new(at(9, 30), at(9, 45)).unwrap();
///
/// assert!(!morning.overlaps(&next));
/// assert!(morning.overlaps(&inside));
/// assert!(TimeSlot::new(at(10, 0), at(10, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeSlot {
    /// Creates a slot, rejecting zero-length and inverted intervals.
    ///
    /// Both endpoints are truncated to whole seconds, the resolution the
    /// store keeps, before they are compared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] unless `start < end` after
    /// truncation.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        let start = start.trunc_subsecs(0);
        let end = end.trunc_subsecs(0);
        if start >= end {
            return Err(Error::InvalidInterval {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the exclusive end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Half-open overlap test.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether `instant` falls inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// A committed room reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: String,
    room_id: String,
    user_id: String,
    title: String,
    organizer: String,
    slot: TimeSlot,
    attendees: u32,
}

impl Reservation {
    pub(crate) fn from_request(id: String, request: &NewReservation) -> Self {
        Self {
            id,
            room_id: request.room_id.clone(),
            user_id: request.user_id.clone(),
            title: request.title.clone(),
            organizer: request.organizer.clone(),
            slot: request.slot,
            attendees: request.attendees,
        }
    }

    pub(crate) fn from_parts(
        id: String,
        room_id: String,
        user_id: String,
        title: String,
        organizer: String,
        slot: TimeSlot,
        attendees: u32,
    ) -> Self {
        Self {
            id,
            room_id,
            user_id,
            title,
            organizer,
            slot,
            attendees,
        }
    }

    /// Returns the reservation id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the booked room's id.
    #[must_use]
    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Returns the username of the account that made the booking.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the meeting title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-text organizer name.
    #[must_use]
    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    /// Returns the booked interval.
    #[must_use]
    pub const fn slot(&self) -> TimeSlot {
        self.slot
    }

    /// Returns the start of the booking.
    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.slot.start
    }

    /// Returns the end of the booking.
    #[must_use]
    pub const fn end_time(&self) -> DateTime<Utc> {
        self.slot.end
    }

    /// Returns the number of attendees.
    #[must_use]
    pub const fn attendees(&self) -> u32 {
        self.attendees
    }
}

/// A validated booking request that has not been stored yet.
///
/// Instances only come out of [`NewReservationBuilder::build`], so the
/// interval and attendee count have already been checked against the room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    room_id: String,
    room_capacity: u32,
    user_id: String,
    title: String,
    organizer: String,
    slot: TimeSlot,
    attendees: u32,
}

impl NewReservation {
    /// Starts a booking request for `room`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use roombook::{NewReservation, Room};
    ///
    /// let room = Room::new("2", "Room 3.2", 4).unwrap();
    /// let start = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
    ///
    /// let request = NewReservation::builder(&room, "alice", start, end)
    ///     .title("Planning")
    ///     .attendees(3)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.room_id(), "2");
    ///
    /// let too_many = NewReservation::builder(&room, "alice", start, end)
    ///     .attendees(5)
    ///     .build();
    /// assert!(too_many.is_err());
    /// ```
    #[must_use]
    pub fn builder(
        room: &Room,
        user_id: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> NewReservationBuilder {
        NewReservationBuilder {
            room_id: room.id().to_string(),
            room_capacity: room.capacity(),
            user_id: user_id.into(),
            title: String::new(),
            organizer: None,
            start,
            end,
            attendees: 1,
        }
    }

    /// Returns the room id.
    #[must_use]
    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Returns the capacity the request was validated against.
    #[must_use]
    pub const fn room_capacity(&self) -> u32 {
        self.room_capacity
    }

    /// Returns the booking user's username.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the meeting title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the organizer.
    #[must_use]
    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    /// Returns the requested interval.
    #[must_use]
    pub const fn slot(&self) -> TimeSlot {
        self.slot
    }

    /// Returns the attendee count.
    #[must_use]
    pub const fn attendees(&self) -> u32 {
        self.attendees
    }

    /// Re-checks the attendee count against the captured room capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the count is out of range.
    pub fn check_capacity(&self) -> Result<()> {
        check_attendees(self.attendees, self.room_capacity)
    }
}

pub(crate) fn check_attendees(attendees: u32, capacity: u32) -> Result<()> {
    if attendees == 0 || attendees > capacity {
        return Err(Error::CapacityExceeded {
            attendees,
            capacity,
        });
    }
    Ok(())
}

/// Builder for [`NewReservation`].
#[derive(Debug)]
pub struct NewReservationBuilder {
    room_id: String,
    room_capacity: u32,
    user_id: String,
    title: String,
    organizer: Option<String>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    attendees: u32,
}

impl NewReservationBuilder {
    /// Sets the meeting title. Trimmed.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into().trim().to_string();
        self
    }

    /// Sets the organizer. Defaults to the booking user.
    #[must_use]
    pub fn organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = Some(organizer.into().trim().to_string());
        self
    }

    /// Sets the number of attendees. Defaults to 1.
    #[must_use]
    pub const fn attendees(mut self, attendees: u32) -> Self {
        self.attendees = attendees;
        self
    }

    /// Validates and builds the request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `start` is not before `end` ([`Error::InvalidInterval`])
    /// - attendees is 0 or above the room capacity ([`Error::CapacityExceeded`])
    /// - the user id is empty
    pub fn build(self) -> Result<NewReservation> {
        let slot = TimeSlot::new(self.start, self.end)?;
        check_attendees(self.attendees, self.room_capacity)?;

        let user_id = self.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(ValidationError::new("user_id", "user id must be non-empty").into());
        }

        let organizer = match self.organizer {
            Some(o) if !o.is_empty() => o,
            _ => user_id.clone(),
        };

        Ok(NewReservation {
            room_id: self.room_id,
            room_capacity: self.room_capacity,
            user_id,
            title: self.title,
            organizer,
            slot,
            attendees: self.attendees,
        })
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, hour, minute, 0).unwrap()
    }

    fn small_room() -> Room {
        Room::new("2", "Room 3.2", 4).unwrap()
    }

    #[test]
    fn test_slot_rejects_zero_length_and_inverted() {
        assert!(matches!(
            TimeSlot::new(at(9, 0), at(9, 0)),
            Err(Error::InvalidInterval { .. })
        ));
        assert!(matches!(
            TimeSlot::new(at(10, 0), at(9, 0)),
            Err(Error::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_slot_truncates_to_whole_seconds() {
        let ms = |millis| at(9, 0) + chrono::Duration::milliseconds(millis);

        // Same second once truncated
        assert!(matches!(
            TimeSlot::new(ms(200), ms(800)),
            Err(Error::InvalidInterval { .. })
        ));

        let slot = TimeSlot::new(ms(500), ms(90_500)).unwrap();
        assert_eq!(slot.start(), at(9, 0));
        assert_eq!(slot.end(), ms(90_000));
    }

    #[test]
    fn test_slot_touching_endpoints_do_not_overlap() {
        let a = TimeSlot::new(at(9, 0), at(10, 0)).unwrap();
        let b = TimeSlot::new(at(10, 0), at(11, 0)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_slot_partial_overlap() {
        let a = TimeSlot::new(at(9, 0), at(10, 30)).unwrap();
        let b = TimeSlot::new(at(10, 0), at(11, 0)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_slot_contains_is_half_open() {
        let a = TimeSlot::new(at(9, 0), at(10, 0)).unwrap();
        assert!(a.contains(at(9, 0)));
        assert!(a.contains(at(9, 59)));
        assert!(!a.contains(at(10, 0)));
    }

    #[test]
    fn test_builder_defaults() {
        let request = NewReservation::builder(&small_room(), "alice", at(9, 0), at(10, 0))
            .build()
            .unwrap();
        assert_eq!(request.attendees(), 1);
        assert_eq!(request.organizer(), "alice");
        assert_eq!(request.title(), "");
        assert_eq!(request.room_capacity(), 4);
    }

    #[test]
    fn test_builder_keeps_explicit_organizer() {
        let request = NewReservation::builder(&small_room(), "alice", at(9, 0), at(10, 0))
            .organizer("  Bob  ")
            .title(" Sync ")
            .build()
            .unwrap();
        assert_eq!(request.organizer(), "Bob");
        assert_eq!(request.title(), "Sync");
    }

    #[test]
    fn test_builder_capacity_bounds() {
        let room = small_room();
        for attendees in [1, 4] {
            assert!(NewReservation::builder(&room, "a", at(9, 0), at(10, 0))
                .attendees(attendees)
                .build()
                .is_ok());
        }
        for attendees in [0, 5] {
            let err = NewReservation::builder(&room, "a", at(9, 0), at(10, 0))
                .attendees(attendees)
                .build()
                .unwrap_err();
            assert!(matches!(err, Error::CapacityExceeded { capacity: 4, .. }));
        }
    }

    #[test]
    fn test_builder_checks_interval_first() {
        let err = NewReservation::builder(&small_room(), "a", at(10, 0), at(9, 0))
            .attendees(99)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInterval { .. }));
    }

    #[test]
    fn test_builder_rejects_empty_user() {
        let err = NewReservation::builder(&small_room(), "  ", at(9, 0), at(10, 0))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "user_id"));
    }

    #[test]
    fn test_reservation_from_request() {
        let request = NewReservation::builder(&small_room(), "alice", at(9, 0), at(10, 0))
            .title("Sync")
            .attendees(3)
            .build()
            .unwrap();
        let reservation = Reservation::from_request("r1".into(), &request);
        assert_eq!(reservation.id(), "r1");
        assert_eq!(reservation.room_id(), "2");
        assert_eq!(reservation.start_time(), at(9, 0));
        assert_eq!(reservation.end_time(), at(10, 0));
        assert_eq!(reservation.attendees(), 3);
    }

    #[test]
    fn test_slot_display() {
        let slot = TimeSlot::new(at(9, 0), at(10, 0)).unwrap();
        assert_eq!(slot.to_string(), "2025-03-03 09:00 - 10:00");
    }
}
