//! Database-backed engine tests
//!
//! These need a live Postgres. Point DATABASE_URL at a scratch database
//! and run with `--ignored`; migrations are applied on first connect.

use chrono::{Duration, NaiveDate, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use fleet_hub::database::run_migrations;
use fleet_hub::dto::assignment_dto::CreateAssignmentRequest;
use fleet_hub::dto::maintenance_dto::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use fleet_hub::models::assignment::AssignmentStatus;
use fleet_hub::models::driver::LicenseCategory;
use fleet_hub::models::maintenance::{MaintenanceStatus, PaymentMethod};
use fleet_hub::models::vehicle::VehicleType;
use fleet_hub::repositories::driver_repository::DriverRepository;
use fleet_hub::repositories::issue_report_repository::IssueReportRepository;
use fleet_hub::repositories::user_repository::UserRepository;
use fleet_hub::repositories::vehicle_repository::VehicleRepository;
use fleet_hub::services::assignment_service::AssignmentService;
use fleet_hub::services::cost_service::CostService;
use fleet_hub::utils::errors::AppError;

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("database connection");
    run_migrations(&pool).await.expect("migrations");
    pool
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_vehicle(pool: &PgPool, tag: &str) -> Uuid {
    let vehicles = VehicleRepository::new(pool.clone());
    let vehicle = vehicles
        .create(
            "Toyota",
            "Hilux",
            2022,
            VehicleType::Truck,
            &tag[..17],
            &tag[..8],
            None,
            None,
            None,
            None,
            None,
            None,
        )
        .await
        .expect("vehicle");
    vehicle.id
}

async fn seed_driver(pool: &PgPool, tag: &str) -> Uuid {
    let users = UserRepository::new(pool.clone());
    let user = users
        .create(
            &format!("driver-{tag}@fleet.test"),
            "not-a-real-hash",
            Some("Test"),
            Some("Driver"),
            None,
            false,
        )
        .await
        .expect("user");

    let mut tx = pool.begin().await.expect("tx");
    let driver = DriverRepository::create_tx(
        &mut *tx,
        user.id,
        &format!("LIC-{}", &tag[..10]),
        LicenseCategory::B,
        None,
        date(2020, 1, 1),
        date(2030, 1, 1),
        None,
    )
    .await
    .expect("driver");
    tx.commit().await.expect("commit");
    driver.id
}

#[tokio::test]
#[ignore = "needs a live database"]
async fn test_deactivating_future_assignment_keeps_window_valid() {
    let pool = test_pool().await;
    let tag = Uuid::new_v4().simple().to_string();

    let driver_id = seed_driver(&pool, &tag).await;
    let vehicle_id = seed_vehicle(&pool, &tag).await;

    let today = Utc::now().date_naive();
    let begin_at = today + Duration::days(10);

    let service = AssignmentService::new(pool.clone());
    service
        .create(
            CreateAssignmentRequest {
                driver_id,
                vehicle_id,
                begin_at,
                ends_at: begin_at + Duration::days(30),
            },
            None,
        )
        .await
        .expect("assignment");

    // Closing an assignment that has not started yet must not trip the
    // window constraint; the end date lands on the begin date instead.
    let closed = service
        .deactivate_for_vehicle(vehicle_id)
        .await
        .expect("deactivation");

    assert_eq!(closed.assignment_status, AssignmentStatus::Inactive);
    assert_eq!(closed.ends_at, begin_at);
    assert!(closed.begin_at <= closed.ends_at);
}

#[tokio::test]
#[ignore = "needs a live database"]
async fn test_resaving_a_maintenance_keeps_one_ledger_row() {
    let pool = test_pool().await;

    let service = CostService::new(pool.clone());
    let (maintenance, _) = service
        .create_maintenance(
            CreateMaintenanceRequest {
                name: Some("gearbox overhaul".to_string()),
                maintenance_begin_date: Some(date(2026, 3, 1)),
                maintenance_end_date: Some(date(2026, 3, 5)),
                payment_date: Some(date(2026, 3, 5)),
                payment_method: PaymentMethod::Bank,
                partner_id: None,
                issue_report_ids: vec![],
            },
            None,
        )
        .await
        .expect("maintenance");

    assert_eq!(maintenance.status, MaintenanceStatus::Approved);

    service
        .update_maintenance(
            maintenance.id,
            UpdateMaintenanceRequest {
                name: Some("gearbox overhaul (revised)".to_string()),
                status: None,
                maintenance_begin_date: None,
                maintenance_end_date: None,
                payment_date: None,
                payment_method: None,
                partner_id: None,
                issue_report_ids: None,
            },
        )
        .await
        .expect("update");

    let rows: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM financial_records WHERE maintenance_id = $1")
            .bind(maintenance.id)
            .fetch_one(&pool)
            .await
            .expect("count");

    assert_eq!(rows, 1);
}

#[tokio::test]
#[ignore = "needs a live database"]
async fn test_pricing_a_fixed_issue_fails_and_leaves_cost_untouched() {
    let pool = test_pool().await;
    let tag = Uuid::new_v4().simple().to_string();

    let vehicle_id = seed_vehicle(&pool, &tag).await;
    let issues = IssueReportRepository::new(pool.clone());
    let issue = issues
        .create(
            "cracked windshield",
            vehicle_id,
            fleet_hub::models::issue_report::IssuePriority::Medium,
            "chip spread across the driver side",
            None,
        )
        .await
        .expect("issue");

    sqlx::query("UPDATE issue_reports SET is_fixed = TRUE WHERE id = $1")
        .bind(issue.id)
        .execute(&pool)
        .await
        .expect("mark fixed");

    let service = CostService::new(pool.clone());
    let result = service
        .set_issue_cost(issue.id, rust_decimal::Decimal::new(5000, 2))
        .await;

    assert!(matches!(result, Err(AppError::InvalidState(_))));

    let stored: Option<rust_decimal::Decimal> =
        sqlx::query_scalar("SELECT issue_cost FROM issue_reports WHERE id = $1")
            .bind(issue.id)
            .fetch_one(&pool)
            .await
            .expect("reload");

    assert_eq!(stored, None);
}
