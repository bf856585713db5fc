//! Vehicle-driver assignment DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::assignment::{AssignmentStatus, VehicleDriverAssignment};

use super::{driver_dto::DriverResponse, vehicle_dto::VehicleResponse};

#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
    pub begin_at: NaiveDate,
    pub ends_at: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
    pub assignment_status: AssignmentStatus,
    pub begin_at: NaiveDate,
    pub ends_at: NaiveDate,
}

impl From<VehicleDriverAssignment> for AssignmentResponse {
    fn from(a: VehicleDriverAssignment) -> Self {
        Self {
            id: a.id,
            driver_id: a.driver_id,
            vehicle_id: a.vehicle_id,
            assignment_status: a.assignment_status,
            begin_at: a.begin_at,
            ends_at: a.ends_at,
        }
    }
}

/// Listing entry: assignment expanded with its driver and vehicle
#[derive(Debug, Serialize)]
pub struct AssignmentListResponse {
    pub id: Uuid,
    pub driver: DriverResponse,
    pub vehicle: VehicleResponse,
    pub assignment_status: AssignmentStatus,
    pub begin_at: NaiveDate,
    pub ends_at: NaiveDate,
}

/// Query parameters for the assignment count endpoint
#[derive(Debug, Deserialize)]
pub struct AssignmentCountQuery {
    pub active: Option<bool>,
}
