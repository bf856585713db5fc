//! Authentication controller

use sqlx::PgPool;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, LoginUserDetails};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    users: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            users: UserRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("invalid credentials".to_string()))?;

        let password_ok = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("password verification failed: {}", e)))?;

        if !password_ok {
            return Err(AppError::Unauthorized("invalid credentials".to_string()));
        }

        if !user.is_active {
            return Err(AppError::Unauthorized("account is deactivated".to_string()));
        }

        let access = generate_token(user.id, &user.email, user.is_staff, &self.jwt_config)?;

        Ok(LoginResponse {
            success: true,
            access,
            user: LoginUserDetails {
                user_id: user.id,
                username: user.full_name(),
                first_name: user.first_name,
                last_name: user.last_name,
                is_staff: user.is_staff,
            },
        })
    }
}
