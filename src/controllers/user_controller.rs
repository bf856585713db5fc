//! User controller

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateUserRequest) -> AppResult<ApiResponse<UserResponse>> {
        request.validate()?;

        if self.repository.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "user with email '{}' already exists",
                request.email
            )));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?;

        let user = self
            .repository
            .create(
                &request.email,
                &password_hash,
                request.first_name.as_deref(),
                request.last_name.as_deref(),
                request.employee_id.as_deref(),
                request.is_staff,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "user created".to_string(),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<UserResponse> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("User", &id.to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<ApiResponse<UserResponse>> {
        let user = self
            .repository
            .set_active(id, is_active)
            .await?
            .ok_or_else(|| not_found_error("User", &id.to_string()))?;

        let message = if is_active { "user activated" } else { "user deactivated" };

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            message.to_string(),
        ))
    }

    pub async fn count(&self, active: Option<bool>) -> AppResult<i64> {
        self.repository.count(active).await
    }
}
