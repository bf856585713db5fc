//! Vehicle technician DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::technician::VehicleTechnician;

use super::{user_dto::UserResponse, vehicle_dto::VehicleResponse};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTechnicianRequest {
    pub user_id: Uuid,

    #[validate(length(min = 1, message = "at least one managed vehicle is required"))]
    pub managed_vehicles: Vec<Uuid>,

    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct TechnicianResponse {
    pub id: Uuid,
    pub user: UserResponse,
    pub managed_vehicles: Vec<VehicleResponse>,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TechnicianResponse {
    pub fn from_parts(
        technician: VehicleTechnician,
        user: UserResponse,
        managed_vehicles: Vec<VehicleResponse>,
    ) -> Self {
        Self {
            id: technician.id,
            user,
            managed_vehicles,
            begin_date: technician.begin_date,
            end_date: technician.end_date,
        }
    }
}
