use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use tempfile::TempDir;

use roombook::database::{Database, DatabaseConfig};
use roombook::{NewReservation, NewUser, Room};

const BOOKED_SIZES: &[usize] = &[10, 100, 500];
const BENCH_ROOM: &str = "3";
const BENCH_USER: &str = "bencher";

fn setup_database() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let db_path = temp_dir.path().join("roombook.db");
    let mut db = Database::open(DatabaseConfig::new(&db_path))
        .expect("failed to open temporary database");
    let user = NewUser::new(BENCH_USER, "password", "bench@x.com", "Bench")
        .expect("failed to build user");
    db.register(&user).expect("failed to register user");
    (temp_dir, db)
}

fn slot_start(index: usize) -> DateTime<Utc> {
    let base = Utc
        .with_ymd_and_hms(2025, 3, 3, 8, 0, 0)
        .single()
        .expect("valid base time");
    base + Duration::minutes(30 * i64::try_from(index).expect("index fits in i64"))
}

fn bench_room(db: &Database) -> Room {
    Database::get_room(db.connection(), BENCH_ROOM)
        .expect("room lookup failed")
        .expect("seeded room missing")
}

fn request(room: &Room, index: usize) -> NewReservation {
    let start = slot_start(index);
    NewReservation::builder(room, BENCH_USER, start, start + Duration::minutes(30))
        .title("bench")
        .attendees(2)
        .build()
        .expect("failed to build request")
}

fn populate_reservations(db: &mut Database, count: usize) {
    let room = bench_room(db);
    for index in 0..count {
        db.book(&request(&room, index)).expect("failed to book");
    }
}

fn bench_book_single(c: &mut Criterion) {
    c.bench_function("book_single", |b| {
        b.iter_batched(
            setup_database,
            |(temp_dir, mut db)| {
                let _temp_dir = temp_dir;
                let room = bench_room(&db);
                black_box(db.book(&request(&room, 0)).expect("failed to book"));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_book_into_busy_room(c: &mut Criterion) {
    let mut group = c.benchmark_group("book_into_busy_room");

    for &size in BOOKED_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &count| {
            b.iter_batched(
                || {
                    let (temp_dir, mut db) = setup_database();
                    populate_reservations(&mut db, count);
                    (temp_dir, db)
                },
                |(temp_dir, mut db)| {
                    let _temp_dir = temp_dir;
                    let room = bench_room(&db);
                    black_box(db.book(&request(&room, count)).expect("failed to book"));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_conflict_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflict_detection");

    for &size in BOOKED_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &count| {
            b.iter_batched(
                || {
                    let (temp_dir, mut db) = setup_database();
                    populate_reservations(&mut db, count);
                    (temp_dir, db)
                },
                |(temp_dir, mut db)| {
                    let _temp_dir = temp_dir;
                    let room = bench_room(&db);
                    let result = db.book(&request(&room, count - 1));
                    black_box(result.expect_err("last slot is taken"));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_room_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_status");

    for &size in BOOKED_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &count| {
            b.iter_batched(
                || {
                    let (temp_dir, mut db) = setup_database();
                    populate_reservations(&mut db, count);
                    (temp_dir, db)
                },
                |(temp_dir, db)| {
                    let _temp_dir = temp_dir;
                    let status = Database::room_status(db.connection(), BENCH_ROOM, slot_start(count / 2))
                        .expect("status failed");
                    black_box(status);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    booking_bench,
    bench_book_single,
    bench_book_into_busy_room,
    bench_conflict_detection,
    bench_room_status
);
criterion_main!(booking_bench);
