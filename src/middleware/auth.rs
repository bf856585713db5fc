//! JWT authentication middleware
//!
//! Verifies the bearer token, loads the account behind it and injects an
//! `AuthenticatedUser` extension for downstream handlers. Deactivated
//! accounts are rejected even if their token is still valid.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Extension,
};
use uuid::Uuid;

use crate::models::user::User;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Identity injected into every authenticated request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub is_staff: bool,
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("authorization header required".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("invalid user id in token".to_string()))?;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::Unauthorized("user not found".to_string()))?;

    if !user.is_active {
        return Err(AppError::Unauthorized("account is deactivated".to_string()));
    }

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
        is_staff: user.is_staff,
    });

    Ok(next.run(request).await)
}

/// Gate for staff-only routes; runs after `auth_middleware`.
pub async fn staff_middleware(
    Extension(user): Extension<AuthenticatedUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !user.is_staff {
        return Err(AppError::Forbidden("staff access required".to_string()));
    }

    Ok(next.run(request).await)
}
