//! Vehicle persistence

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleType};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        make: &str,
        model: &str,
        year: i32,
        vehicle_type: VehicleType,
        vin: &str,
        license_plate: &str,
        color: Option<&str>,
        mileage: Option<i32>,
        image_path: Option<&str>,
        purchase_date: Option<NaiveDate>,
        last_service_date: Option<NaiveDate>,
        created_by: Option<Uuid>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, make, model, year, vehicle_type, vin, license_plate,
                                  color, mileage, image_path, purchase_date, last_service_date, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(vehicle_type)
        .bind(vin)
        .bind(license_plate)
        .bind(color)
        .bind(mileage)
        .bind(image_path)
        .bind(purchase_date)
        .bind(last_service_date)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_vin(&self, vin: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE vin = $1")
            .bind(vin)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_license_plate(&self, plate: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE license_plate = $1")
                .bind(plate)
                .fetch_optional(&self.pool)
                .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        color: Option<&str>,
        mileage: Option<i32>,
        image_path: Option<&str>,
        last_service_date: Option<NaiveDate>,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles SET
                color             = COALESCE($2, color),
                mileage           = COALESCE($3, mileage),
                image_path        = COALESCE($4, image_path),
                last_service_date = COALESCE($5, last_service_date),
                updated_at        = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(color)
        .bind(mileage)
        .bind(image_path)
        .bind(last_service_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
