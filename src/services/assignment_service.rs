//! Assignment rule engine
//!
//! Owns the vehicle-driver assignment lifecycle. Creation enforces the
//! date window and existence checks up front; the one-active-per-vehicle
//! rule itself is enforced by the storage layer, so concurrent creates
//! resolve to exactly one winner.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::assignment_dto::CreateAssignmentRequest;
use crate::models::assignment::VehicleDriverAssignment;
use crate::repositories::{
    assignment_repository::AssignmentRepository, driver_repository::DriverRepository,
    vehicle_repository::VehicleRepository,
};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct AssignmentService {
    assignments: AssignmentRepository,
    drivers: DriverRepository,
    vehicles: VehicleRepository,
}

impl AssignmentService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assignments: AssignmentRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAssignmentRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<VehicleDriverAssignment> {
        if request.begin_at > request.ends_at {
            return Err(AppError::Validation(
                "assignment begin date must not be after its end date".to_string(),
            ));
        }

        self.drivers
            .find_by_id(request.driver_id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &request.driver_id.to_string()))?;

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;

        self.assignments
            .create(
                request.driver_id,
                request.vehicle_id,
                request.begin_at,
                request.ends_at,
                created_by,
            )
            .await
    }

    /// Closes the active assignment of a vehicle. The end date is stamped
    /// with today, clamped to the begin date for assignments that have not
    /// started yet, so the history window stays truthful.
    pub async fn deactivate_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> AppResult<VehicleDriverAssignment> {
        self.vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        self.assignments
            .deactivate_for_vehicle(vehicle_id, Utc::now().date_naive())
            .await?
            .ok_or_else(|| {
                AppError::NotFound("vehicle has no active assignment".to_string())
            })
    }

    pub async fn active_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> AppResult<Option<VehicleDriverAssignment>> {
        self.assignments.active_for_vehicle(vehicle_id).await
    }

    pub async fn active_for_driver(
        &self,
        driver_id: Uuid,
    ) -> AppResult<Option<VehicleDriverAssignment>> {
        self.assignments.active_for_driver(driver_id).await
    }
}
