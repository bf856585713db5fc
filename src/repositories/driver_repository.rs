//! Driver persistence

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::driver::{Driver, LicenseCategory};
use crate::utils::errors::AppError;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts the driver profile. Runs inside the same transaction as the
    /// account insert during registration.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_tx(
        conn: &mut PgConnection,
        user_id: Uuid,
        license_number: &str,
        license_category: LicenseCategory,
        license_file_path: Option<&str>,
        delivery_date: NaiveDate,
        expiry_date: NaiveDate,
        created_by: Option<Uuid>,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (id, user_id, license_number, license_category,
                                 license_file_path, delivery_date, expiry_date, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(license_number)
        .bind(license_category)
        .bind(license_file_path)
        .bind(delivery_date)
        .bind(expiry_date)
        .bind(created_by)
        .fetch_one(conn)
        .await?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn find_all(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(drivers)
    }

    pub async fn update(
        &self,
        id: Uuid,
        license_number: Option<&str>,
        license_category: Option<LicenseCategory>,
        license_file_path: Option<&str>,
        delivery_date: Option<NaiveDate>,
        expiry_date: Option<NaiveDate>,
    ) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers SET
                license_number    = COALESCE($2, license_number),
                license_category  = COALESCE($3, license_category),
                license_file_path = COALESCE($4, license_file_path),
                delivery_date     = COALESCE($5, delivery_date),
                expiry_date       = COALESCE($6, expiry_date),
                updated_at        = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(license_number)
        .bind(license_category)
        .bind(license_file_path)
        .bind(delivery_date)
        .bind(expiry_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM drivers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
