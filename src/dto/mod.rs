pub mod assignment_dto;
pub mod auth_dto;
pub mod dashboard_dto;
pub mod document_dto;
pub mod driver_dto;
pub mod fuel_dto;
pub mod issue_report_dto;
pub mod maintenance_dto;
pub mod partner_dto;
pub mod technician_dto;
pub mod user_dto;
pub mod vehicle_dto;

use serde::Serialize;

/// Generic success/failure envelope for API responses
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }

    pub fn message_only(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: None,
        }
    }
}

/// Response for the `/count` endpoints
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub success: bool,
    pub count: i64,
}

impl CountResponse {
    pub fn new(count: i64) -> Self {
        Self { success: true, count }
    }
}
