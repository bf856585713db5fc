//! Vehicle-driver assignment persistence
//!
//! The one-active-assignment-per-vehicle rule is closed here: the INSERT
//! relies on the `uq_active_vehicle_assignment` partial index, so two
//! concurrent creates for the same vehicle cannot both land.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::assignment::VehicleDriverAssignment;
use crate::utils::errors::{is_unique_violation, AppError};

pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        driver_id: Uuid,
        vehicle_id: Uuid,
        begin_at: NaiveDate,
        ends_at: NaiveDate,
        created_by: Option<Uuid>,
    ) -> Result<VehicleDriverAssignment, AppError> {
        let assignment = sqlx::query_as::<_, VehicleDriverAssignment>(
            r#"
            INSERT INTO vehicle_driver_assignments
                (id, driver_id, vehicle_id, assignment_status, begin_at, ends_at, created_by)
            VALUES ($1, $2, $3, 'active', $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(driver_id)
        .bind(vehicle_id)
        .bind(begin_at)
        .bind(ends_at)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "uq_active_vehicle_assignment") {
                AppError::Conflict("vehicle already has an active assignment".to_string())
            } else {
                e.into()
            }
        })?;

        Ok(assignment)
    }

    /// Closes the active assignment of a vehicle, if any. The single UPDATE
    /// keeps concurrent deactivations from racing each other. The end date
    /// is clamped to `begin_at` so closing an assignment scheduled in the
    /// future still satisfies the window CHECK.
    pub async fn deactivate_for_vehicle(
        &self,
        vehicle_id: Uuid,
        ends_at: NaiveDate,
    ) -> Result<Option<VehicleDriverAssignment>, AppError> {
        let assignment = sqlx::query_as::<_, VehicleDriverAssignment>(
            r#"
            UPDATE vehicle_driver_assignments
            SET assignment_status = 'inactive', ends_at = GREATEST(begin_at, $2), updated_at = now()
            WHERE vehicle_id = $1 AND assignment_status = 'active'
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(ends_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(assignment)
    }

    pub async fn active_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Option<VehicleDriverAssignment>, AppError> {
        let assignment = sqlx::query_as::<_, VehicleDriverAssignment>(
            r#"
            SELECT * FROM vehicle_driver_assignments
            WHERE vehicle_id = $1 AND assignment_status = 'active'
            ORDER BY begin_at DESC
            LIMIT 1
            "#,
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(assignment)
    }

    pub async fn active_for_driver(
        &self,
        driver_id: Uuid,
    ) -> Result<Option<VehicleDriverAssignment>, AppError> {
        let assignment = sqlx::query_as::<_, VehicleDriverAssignment>(
            r#"
            SELECT * FROM vehicle_driver_assignments
            WHERE driver_id = $1 AND assignment_status = 'active'
            ORDER BY begin_at DESC
            LIMIT 1
            "#,
        )
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(assignment)
    }

    pub async fn find_all(&self) -> Result<Vec<VehicleDriverAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, VehicleDriverAssignment>(
            "SELECT * FROM vehicle_driver_assignments ORDER BY begin_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    pub async fn find_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<VehicleDriverAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, VehicleDriverAssignment>(
            "SELECT * FROM vehicle_driver_assignments WHERE vehicle_id = $1 ORDER BY begin_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    pub async fn count(&self, active: Option<bool>) -> Result<i64, AppError> {
        let count: i64 = match active {
            Some(true) => {
                sqlx::query_scalar(
                    "SELECT COUNT(*) FROM vehicle_driver_assignments WHERE assignment_status = 'active'",
                )
                .fetch_one(&self.pool)
                .await?
            }
            Some(false) => {
                sqlx::query_scalar(
                    "SELECT COUNT(*) FROM vehicle_driver_assignments WHERE assignment_status = 'inactive'",
                )
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM vehicle_driver_assignments")
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(count)
    }
}
