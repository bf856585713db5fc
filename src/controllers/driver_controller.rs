//! Driver controller
//!
//! Registration creates the account and the driver profile in one
//! transaction so a failed profile insert never leaves an orphan account.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::driver_dto::{DriverResponse, RegisterDriverRequest, UpdateDriverRequest};
use crate::dto::user_dto::UserResponse;
use crate::dto::ApiResponse;
use crate::repositories::{driver_repository::DriverRepository, user_repository::UserRepository};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct DriverController {
    pool: PgPool,
    drivers: DriverRepository,
    users: UserRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            drivers: DriverRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn register(
        &self,
        request: RegisterDriverRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<DriverResponse>> {
        request.validate()?;

        if request.delivery_date > request.expiry_date {
            return Err(AppError::Validation(
                "license delivery date must not be after its expiry date".to_string(),
            ));
        }

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "user with email '{}' already exists",
                request.email
            )));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?;

        let mut tx = self.pool.begin().await?;

        let user = UserRepository::create_tx(
            &mut *tx,
            &request.email,
            &password_hash,
            request.first_name.as_deref(),
            request.last_name.as_deref(),
            request.employee_id.as_deref(),
            false,
        )
        .await?;

        let driver = DriverRepository::create_tx(
            &mut *tx,
            user.id,
            &request.license_number,
            request.license_category,
            request.license_file_path.as_deref(),
            request.delivery_date,
            request.expiry_date,
            created_by,
        )
        .await?;

        tx.commit().await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from_parts(driver, UserResponse::from(user)),
            "driver registered".to_string(),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<DriverResponse>> {
        let drivers = self.drivers.find_all().await?;
        let user_ids: Vec<Uuid> = drivers.iter().map(|d| d.user_id).collect();
        let mut users: HashMap<Uuid, UserResponse> = self
            .users
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, UserResponse::from(u)))
            .collect();

        let mut responses = Vec::with_capacity(drivers.len());
        for driver in drivers {
            let user = users
                .remove(&driver.user_id)
                .ok_or_else(|| not_found_error("User", &driver.user_id.to_string()))?;
            responses.push(DriverResponse::from_parts(driver, user));
        }

        Ok(responses)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<DriverResponse> {
        let driver = self
            .drivers
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        let user = self
            .users
            .find_by_id(driver.user_id)
            .await?
            .ok_or_else(|| not_found_error("User", &driver.user_id.to_string()))?;

        Ok(DriverResponse::from_parts(driver, UserResponse::from(user)))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> AppResult<ApiResponse<DriverResponse>> {
        request.validate()?;

        let current = self
            .drivers
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        let delivery = request.delivery_date.unwrap_or(current.delivery_date);
        let expiry = request.expiry_date.unwrap_or(current.expiry_date);
        if delivery > expiry {
            return Err(AppError::Validation(
                "license delivery date must not be after its expiry date".to_string(),
            ));
        }

        let driver = self
            .drivers
            .update(
                id,
                request.license_number.as_deref(),
                request.license_category,
                request.license_file_path.as_deref(),
                request.delivery_date,
                request.expiry_date,
            )
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        let user = self
            .users
            .find_by_id(driver.user_id)
            .await?
            .ok_or_else(|| not_found_error("User", &driver.user_id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from_parts(driver, UserResponse::from(user)),
            "driver updated".to_string(),
        ))
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.drivers.count().await
    }
}
