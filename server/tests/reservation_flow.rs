//! Reservation allocation behavior against a real embedded database.
//!
//! Every test opens a fresh RocksDB-backed SurrealDB instance in a temp
//! directory, seeds dining tables through the repository layer, and drives
//! the allocator exactly as the HTTP handlers do.

use futures::future::join_all;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tempfile::TempDir;

use mesa_server::allocator::{NO_CAPACITY_REASON, TableAllocator};
use mesa_server::db::DbService;
use mesa_server::db::models::{
    DiningTable, DiningTableCreate, ReservationCreate, ReservationFilter, SeatingType,
};
use mesa_server::db::repository::{DiningTableRepository, RepoError, ReservationRepository};
use mesa_server::utils::AppError;

async fn setup() -> (TempDir, Surreal<Db>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let service = DbService::new(&db_path)
        .await
        .expect("Failed to initialize database");
    (dir, service.db)
}

async fn seed_table(
    db: &Surreal<Db>,
    table_number: i64,
    seats: i64,
    seating: SeatingType,
    available: bool,
) -> DiningTable {
    DiningTableRepository::new(db.clone())
        .create(DiningTableCreate {
            table_number,
            seats,
            seating,
            available: Some(available),
        })
        .await
        .expect("Failed to seed table")
}

fn request(guests: i64, seating: SeatingType, date: &str, time: &str) -> ReservationCreate {
    ReservationCreate {
        first_name: "Maria".into(),
        last_name: "Santos".into(),
        email: "maria@example.com".into(),
        phone: "+351 912 000 111".into(),
        date: date.into(),
        time: time.into(),
        guests,
        seating,
        special_requests: None,
        occasion: None,
    }
}

fn assert_no_capacity(result: Result<impl std::fmt::Debug, AppError>) {
    match result {
        Err(AppError::NoCapacity { reason }) => assert_eq!(reason, NO_CAPACITY_REASON),
        other => panic!("Expected NoCapacity, got {:?}", other),
    }
}

#[tokio::test]
async fn assigns_smallest_fitting_table() {
    let (_dir, db) = setup().await;
    seed_table(&db, 1, 2, SeatingType::Indoor, true).await;
    seed_table(&db, 2, 4, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());

    // 3 guests fit only the 4-seat table
    let detail = allocator
        .reserve(request(3, SeatingType::Indoor, "2026-09-12", "19:00"))
        .await
        .expect("Reservation should succeed");
    assert_eq!(detail.table.table_number, 2);
    assert_eq!(detail.table.seats, 4);

    // Same slot again: the only fitting table is taken
    assert_no_capacity(
        allocator
            .reserve(request(3, SeatingType::Indoor, "2026-09-12", "19:00"))
            .await,
    );
}

#[tokio::test]
async fn prefers_smaller_table_when_both_fit() {
    let (_dir, db) = setup().await;
    seed_table(&db, 1, 6, SeatingType::Indoor, true).await;
    seed_table(&db, 2, 2, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());
    let detail = allocator
        .reserve(request(2, SeatingType::Indoor, "2026-09-12", "12:00"))
        .await
        .expect("Reservation should succeed");

    assert_eq!(detail.table.seats, 2);
}

#[tokio::test]
async fn seat_boundary_is_inclusive() {
    let (_dir, db) = setup().await;
    seed_table(&db, 1, 4, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());

    // guests == seats books the table
    let detail = allocator
        .reserve(request(4, SeatingType::Indoor, "2026-09-12", "13:00"))
        .await
        .expect("Exact-fit reservation should succeed");
    assert_eq!(detail.table.seats, 4);

    // guests > seats on a different slot never fits
    assert_no_capacity(
        allocator
            .reserve(request(5, SeatingType::Indoor, "2026-09-12", "14:00"))
            .await,
    );
}

#[tokio::test]
async fn seating_type_is_a_hard_filter() {
    let (_dir, db) = setup().await;
    seed_table(&db, 1, 8, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());
    assert_no_capacity(
        allocator
            .reserve(request(2, SeatingType::Outdoor, "2026-09-12", "19:00"))
            .await,
    );
}

#[tokio::test]
async fn failed_request_leaves_no_trace() {
    let (_dir, db) = setup().await;
    seed_table(&db, 1, 2, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());

    assert_no_capacity(
        allocator
            .reserve(request(6, SeatingType::Indoor, "2026-09-12", "19:00"))
            .await,
    );

    // Nothing was written, and the slot is still bookable
    let listed = allocator
        .list(ReservationFilter::default())
        .await
        .expect("List should succeed");
    assert!(listed.is_empty());

    allocator
        .reserve(request(2, SeatingType::Indoor, "2026-09-12", "19:00"))
        .await
        .expect("Slot should still be bookable");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_book_the_table_once() {
    let (_dir, db) = setup().await;
    seed_table(&db, 1, 4, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());

    let attempts = (0..8).map(|_| {
        let allocator = allocator.clone();
        async move {
            allocator
                .reserve(request(2, SeatingType::Indoor, "2026-09-12", "20:00"))
                .await
        }
    });

    let results = join_all(attempts).await;
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one concurrent claim must win");

    for result in results.into_iter().filter(|r| r.is_err()) {
        assert_no_capacity(result);
    }

    // The winning reservation is the only row
    let listed = allocator
        .list(ReservationFilter::default())
        .await
        .expect("List should succeed");
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn reserve_then_list_round_trip() {
    let (_dir, db) = setup().await;
    seed_table(&db, 7, 4, SeatingType::Outdoor, true).await;

    let allocator = TableAllocator::new(db.clone());
    let mut req = request(3, SeatingType::Outdoor, "2026-09-12", "18:30");
    req.special_requests = Some("Window seat if possible".into());
    req.occasion = Some("anniversary".into());

    let created = allocator.reserve(req).await.expect("Reservation failed");

    let listed = allocator
        .list(ReservationFilter {
            date: Some("2026-09-12".into()),
            time: Some("18:30".into()),
        })
        .await
        .expect("List should succeed");

    assert_eq!(listed.len(), 1);
    let found = &listed[0];
    assert_eq!(found.id, created.id);
    assert_eq!(found.first_name, "Maria");
    assert_eq!(found.table.table_number, 7);
    assert_eq!(found.seating, SeatingType::Outdoor);
    assert_eq!(found.special_requests.as_deref(), Some("Window seat if possible"));
    assert_eq!(found.occasion.as_deref(), Some("anniversary"));
}

#[tokio::test]
async fn list_is_ordered_by_date_then_time() {
    let (_dir, db) = setup().await;
    seed_table(&db, 1, 4, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());
    for (date, time) in [
        ("2026-09-13", "12:00"),
        ("2026-09-12", "20:00"),
        ("2026-09-12", "11:30"),
    ] {
        allocator
            .reserve(request(2, SeatingType::Indoor, date, time))
            .await
            .expect("Reservation failed");
    }

    let listed = allocator
        .list(ReservationFilter::default())
        .await
        .expect("List should succeed");

    let order: Vec<(String, String)> = listed
        .iter()
        .map(|r| (r.date.clone(), r.time.clone()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("2026-09-12".to_string(), "11:30".to_string()),
            ("2026-09-12".to_string(), "20:00".to_string()),
            ("2026-09-13".to_string(), "12:00".to_string()),
        ]
    );
}

#[tokio::test]
async fn cancel_releases_the_slot() {
    let (_dir, db) = setup().await;
    seed_table(&db, 1, 4, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());
    let created = allocator
        .reserve(request(2, SeatingType::Indoor, "2026-09-12", "19:00"))
        .await
        .expect("Reservation failed");

    // Slot is held
    assert_no_capacity(
        allocator
            .reserve(request(2, SeatingType::Indoor, "2026-09-12", "19:00"))
            .await,
    );

    let id = created.id.expect("Created reservation has an id").to_string();
    allocator.cancel(&id).await.expect("Cancel failed");

    // Slot is free again
    allocator
        .reserve(request(2, SeatingType::Indoor, "2026-09-12", "19:00"))
        .await
        .expect("Slot should be bookable after cancellation");
}

#[tokio::test]
async fn cancel_unknown_reservation_is_not_found() {
    let (_dir, db) = setup().await;
    let allocator = TableAllocator::new(db.clone());

    let result = allocator.cancel("reservation:doesnotexist").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn same_table_serves_different_slots() {
    let (_dir, db) = setup().await;
    seed_table(&db, 1, 4, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());

    let lunch = allocator
        .reserve(request(2, SeatingType::Indoor, "2026-09-12", "12:30"))
        .await
        .expect("Lunch reservation failed");
    let dinner = allocator
        .reserve(request(2, SeatingType::Indoor, "2026-09-12", "19:30"))
        .await
        .expect("Dinner reservation failed");
    let next_day = allocator
        .reserve(request(2, SeatingType::Indoor, "2026-09-13", "12:30"))
        .await
        .expect("Next-day reservation failed");

    assert_eq!(lunch.table.table_number, 1);
    assert_eq!(dinner.table.table_number, 1);
    assert_eq!(next_day.table.table_number, 1);
}

#[tokio::test]
async fn blocked_table_is_never_assigned() {
    let (_dir, db) = setup().await;
    let blocked = seed_table(&db, 1, 4, SeatingType::Indoor, false).await;

    let allocator = TableAllocator::new(db.clone());
    assert_no_capacity(
        allocator
            .reserve(request(2, SeatingType::Indoor, "2026-09-12", "19:00"))
            .await,
    );

    // Unblocking makes it eligible again
    let id = blocked.id.expect("Seeded table has an id").to_string();
    DiningTableRepository::new(db.clone())
        .set_availability(&id, true)
        .await
        .expect("Unblock failed");

    allocator
        .reserve(request(2, SeatingType::Indoor, "2026-09-12", "19:00"))
        .await
        .expect("Unblocked table should be assigned");
}

#[tokio::test]
async fn blocking_a_table_keeps_existing_reservations() {
    let (_dir, db) = setup().await;
    let table = seed_table(&db, 1, 4, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());
    allocator
        .reserve(request(2, SeatingType::Indoor, "2026-09-12", "19:00"))
        .await
        .expect("Reservation failed");

    let id = table.id.expect("Seeded table has an id").to_string();
    let repo = DiningTableRepository::new(db.clone());
    repo.set_availability(&id, false).await.expect("Block failed");
    // Idempotent
    let again = repo.set_availability(&id, false).await.expect("Re-block failed");
    assert!(!again.available);

    let listed = allocator
        .list(ReservationFilter::default())
        .await
        .expect("List should succeed");
    assert_eq!(listed.len(), 1, "blocking must not cancel reservations");
}

#[tokio::test]
async fn duplicate_table_number_is_rejected() {
    let (_dir, db) = setup().await;
    seed_table(&db, 1, 4, SeatingType::Indoor, true).await;

    let result = DiningTableRepository::new(db.clone())
        .create(DiningTableCreate {
            table_number: 1,
            seats: 2,
            seating: SeatingType::Outdoor,
            available: None,
        })
        .await;

    assert!(matches!(result, Err(RepoError::Duplicate(_))));
}

#[tokio::test]
async fn table_with_reservations_is_reported() {
    let (_dir, db) = setup().await;
    let table = seed_table(&db, 1, 4, SeatingType::Indoor, true).await;

    let allocator = TableAllocator::new(db.clone());
    let created = allocator
        .reserve(request(2, SeatingType::Indoor, "2026-09-12", "19:00"))
        .await
        .expect("Reservation failed");

    let reservations = ReservationRepository::new(db.clone());
    let table_id = table.id.expect("Seeded table has an id");
    assert!(
        reservations
            .exists_for_table(&table_id)
            .await
            .expect("Lookup failed")
    );

    let id = created.id.expect("Created reservation has an id").to_string();
    allocator.cancel(&id).await.expect("Cancel failed");
    assert!(
        !reservations
            .exists_for_table(&table_id)
            .await
            .expect("Lookup failed")
    );
}

#[tokio::test]
async fn invalid_requests_are_rejected_without_queries() {
    let (_dir, db) = setup().await;
    let allocator = TableAllocator::new(db.clone());

    let mut bad_date = request(2, SeatingType::Indoor, "next friday", "19:00");
    bad_date.date = "next friday".into();
    assert!(matches!(
        allocator.reserve(bad_date).await,
        Err(AppError::Validation(_))
    ));

    let bad_time = request(2, SeatingType::Indoor, "2026-09-12", "19:17");
    assert!(matches!(
        allocator.reserve(bad_time).await,
        Err(AppError::Validation(_))
    ));

    let mut bad_email = request(2, SeatingType::Indoor, "2026-09-12", "19:00");
    bad_email.email = "nope".into();
    assert!(matches!(
        allocator.reserve(bad_email).await,
        Err(AppError::Validation(_))
    ));
}
