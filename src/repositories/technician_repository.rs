//! Vehicle technician persistence

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::technician::VehicleTechnician;
use crate::utils::errors::AppError;

pub struct TechnicianRepository {
    pool: PgPool,
}

impl TechnicianRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_tx(
        conn: &mut PgConnection,
        user_id: Uuid,
        begin_date: NaiveDate,
        end_date: NaiveDate,
        created_by: Option<Uuid>,
    ) -> Result<VehicleTechnician, AppError> {
        let technician = sqlx::query_as::<_, VehicleTechnician>(
            r#"
            INSERT INTO vehicle_technicians (id, user_id, begin_date, end_date, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(begin_date)
        .bind(end_date)
        .bind(created_by)
        .fetch_one(conn)
        .await?;

        Ok(technician)
    }

    pub async fn link_vehicle_tx(
        conn: &mut PgConnection,
        technician_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO technician_vehicles (technician_id, vehicle_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(technician_id)
        .bind(vehicle_id)
        .execute(conn)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VehicleTechnician>, AppError> {
        let technician =
            sqlx::query_as::<_, VehicleTechnician>("SELECT * FROM vehicle_technicians WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(technician)
    }

    pub async fn find_all(&self) -> Result<Vec<VehicleTechnician>, AppError> {
        let technicians = sqlx::query_as::<_, VehicleTechnician>(
            "SELECT * FROM vehicle_technicians ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(technicians)
    }

    pub async fn managed_vehicle_ids(&self, technician_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT vehicle_id FROM technician_vehicles WHERE technician_id = $1",
        )
        .bind(technician_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicle_technicians")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
