//! End-to-end booking scenarios against an on-disk store.

mod common;

use common::{at, book, register, TestStore};
use roombook::{Database, Error};

#[test]
fn test_room_3_2_conflict_scenario() {
    let store = TestStore::new();
    let mut db = store.open();
    register(&mut db, "alice", "a@x.com");
    register(&mut db, "bob", "b@x.com");

    let first = book(&mut db, "2", "alice", at(9, 0), at(10, 0), 3).unwrap();
    assert_eq!(first.room_id(), "2");
    assert_eq!(first.organizer(), "alice");

    match book(&mut db, "2", "bob", at(9, 30), at(10, 30), 3) {
        Err(Error::BookingConflict {
            details,
            conflicting_id,
        }) => {
            assert_eq!(details, Error::CONFLICT_MESSAGE);
            assert_eq!(conflicting_id, first.id());
        }
        other => panic!("expected BookingConflict, got {other:?}"),
    }

    // Back-to-back is fine
    let second = book(&mut db, "2", "bob", at(10, 0), at(11, 0), 3).unwrap();

    let stored = Database::list_reservations_by_room(db.connection(), "2").unwrap();
    let ids: Vec<_> = stored.iter().map(roombook::Reservation::id).collect();
    assert_eq!(ids, [first.id(), second.id()]);
}

#[test]
fn test_same_slot_in_other_rooms() {
    let store = TestStore::new();
    let mut db = store.open();
    register(&mut db, "alice", "a@x.com");

    for room in ["1", "2", "3", "4"] {
        book(&mut db, room, "alice", at(14, 0), at(15, 0), 2).unwrap();
    }
    assert_eq!(Database::list_reservations(db.connection()).unwrap().len(), 4);
    assert_eq!(
        Database::list_reservations_by_user(db.connection(), "alice")
            .unwrap()
            .len(),
        4
    );
}

#[test]
fn test_rejected_bookings_leave_nothing_behind() {
    let store = TestStore::new();
    let mut db = store.open();
    register(&mut db, "alice", "a@x.com");
    book(&mut db, "2", "alice", at(9, 0), at(10, 0), 1).unwrap();

    // Overlap, unknown user, enclosing interval
    assert!(book(&mut db, "2", "alice", at(9, 59), at(10, 1), 1).is_err());
    assert!(matches!(
        book(&mut db, "3", "mallory", at(9, 0), at(10, 0), 1),
        Err(Error::UserNotFound { .. })
    ));
    assert!(book(&mut db, "2", "alice", at(8, 0), at(12, 0), 1).is_err());

    drop(db);
    let db = store.open();
    assert_eq!(Database::list_reservations(db.connection()).unwrap().len(), 1);
}

#[test]
fn test_request_validation() {
    let store = TestStore::new();
    let mut db = store.open();
    register(&mut db, "alice", "a@x.com");

    assert!(matches!(
        book(&mut db, "2", "alice", at(10, 0), at(10, 0), 1),
        Err(Error::InvalidInterval { .. })
    ));
    assert!(matches!(
        book(&mut db, "2", "alice", at(11, 0), at(10, 0), 1),
        Err(Error::InvalidInterval { .. })
    ));
    assert!(matches!(
        book(&mut db, "2", "alice", at(9, 0), at(10, 0), 5),
        Err(Error::CapacityExceeded {
            attendees: 5,
            capacity: 4
        })
    ));
    assert!(matches!(
        book(&mut db, "2", "alice", at(9, 0), at(10, 0), 0),
        Err(Error::CapacityExceeded { .. })
    ));
    assert!(Database::list_reservations(db.connection())
        .unwrap()
        .is_empty());
}

#[test]
fn test_cancel_frees_the_slot() {
    let store = TestStore::new();
    let mut db = store.open();
    register(&mut db, "alice", "a@x.com");
    register(&mut db, "bob", "b@x.com");

    let first = book(&mut db, "1", "alice", at(9, 0), at(10, 0), 6).unwrap();
    assert!(book(&mut db, "1", "bob", at(9, 0), at(10, 0), 6).is_err());

    assert!(db.cancel_reservation(first.id()).unwrap());
    assert!(!db.cancel_reservation(first.id()).unwrap());
    assert!(Database::get_reservation(db.connection(), first.id())
        .unwrap()
        .is_none());

    book(&mut db, "1", "bob", at(9, 0), at(10, 0), 6).unwrap();
}

#[test]
fn test_room_status_over_a_day() {
    let store = TestStore::new();
    let mut db = store.open();
    register(&mut db, "alice", "a@x.com");

    let standup = book(&mut db, "4", "alice", at(9, 0), at(9, 15), 5).unwrap();
    let review = book(&mut db, "4", "alice", at(13, 0), at(14, 0), 8).unwrap();

    let early = Database::room_status(db.connection(), "4", at(8, 0)).unwrap();
    assert!(early.is_available());
    assert_eq!(early.next.as_ref().map(roombook::Reservation::id), Some(standup.id()));

    let during = Database::room_status(db.connection(), "4", at(9, 5)).unwrap();
    assert_eq!(
        during.current.as_ref().map(roombook::Reservation::id),
        Some(standup.id())
    );
    assert_eq!(during.next.as_ref().map(roombook::Reservation::id), Some(review.id()));

    // End instant is outside the meeting
    let boundary = Database::room_status(db.connection(), "4", at(9, 15)).unwrap();
    assert!(boundary.is_available());

    let late = Database::room_status(db.connection(), "4", at(18, 0)).unwrap();
    assert_eq!(late, roombook::RoomStatus::default());

    assert!(matches!(
        Database::room_status(db.connection(), "99", at(9, 0)),
        Err(Error::RoomNotFound { .. })
    ));
}

#[test]
fn test_reservations_survive_reopen() {
    let store = TestStore::new();
    let booked = {
        let mut db = store.open();
        register(&mut db, "alice", "a@x.com");
        book(&mut db, "3", "alice", at(16, 0), at(17, 30), 20).unwrap()
    };

    let db = store.open();
    let stored = Database::get_reservation(db.connection(), booked.id())
        .unwrap()
        .unwrap();
    assert_eq!(stored, booked);
    assert_eq!(stored.start_time(), at(16, 0));
    assert_eq!(stored.end_time(), at(17, 30));
    assert_eq!(stored.attendees(), 20);
}

#[test]
fn test_sub_second_bookings_match_storage() {
    let store = TestStore::new();
    let mut db = store.open();
    register(&mut db, "alice", "a@x.com");
    register(&mut db, "bob", "b@x.com");
    let ms = |millis| at(9, 0) + chrono::Duration::milliseconds(millis);

    // Collapses to an empty interval once stored
    assert!(matches!(
        book(&mut db, "2", "alice", ms(200), ms(800), 1),
        Err(Error::InvalidInterval { .. })
    ));
    assert!(Database::list_reservations(db.connection()).unwrap().is_empty());

    let booked = book(&mut db, "2", "alice", ms(500), ms(3_600_500), 1).unwrap();
    let stored = Database::get_reservation(db.connection(), booked.id())
        .unwrap()
        .unwrap();
    assert_eq!(booked, stored);
    assert_eq!(stored.start_time(), at(9, 0));
    assert_eq!(stored.end_time(), at(10, 0));

    // Starts at the stored end, not inside the untruncated one
    book(&mut db, "2", "bob", ms(3_600_900), at(10, 30), 1).unwrap();
}
