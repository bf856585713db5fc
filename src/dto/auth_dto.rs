//! Authentication DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User details embedded in the login response, mirroring the token claims
#[derive(Debug, Serialize)]
pub struct LoginUserDetails {
    pub user_id: Uuid,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_staff: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub access: String,
    pub user: LoginUserDetails,
}
