//! Assignment controller

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::assignment_dto::{
    AssignmentListResponse, AssignmentResponse, CreateAssignmentRequest,
};
use crate::dto::driver_dto::DriverResponse;
use crate::dto::user_dto::UserResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::dto::ApiResponse;
use crate::repositories::{
    assignment_repository::AssignmentRepository, driver_repository::DriverRepository,
    user_repository::UserRepository, vehicle_repository::VehicleRepository,
};
use crate::services::assignment_service::AssignmentService;
use crate::utils::errors::{not_found_error, AppResult};

pub struct AssignmentController {
    service: AssignmentService,
    assignments: AssignmentRepository,
    drivers: DriverRepository,
    vehicles: VehicleRepository,
    users: UserRepository,
}

impl AssignmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: AssignmentService::new(pool.clone()),
            assignments: AssignmentRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAssignmentRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<AssignmentResponse>> {
        let assignment = self.service.create(request, created_by).await?;

        Ok(ApiResponse::success_with_message(
            AssignmentResponse::from(assignment),
            "assignment created".to_string(),
        ))
    }

    pub async fn deactivate(&self, vehicle_id: Uuid) -> AppResult<ApiResponse<AssignmentResponse>> {
        let assignment = self.service.deactivate_for_vehicle(vehicle_id).await?;

        Ok(ApiResponse::success_with_message(
            AssignmentResponse::from(assignment),
            "assignment deactivated".to_string(),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<AssignmentListResponse>> {
        let assignments = self.assignments.find_all().await?;

        let mut responses = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let driver = self
                .drivers
                .find_by_id(assignment.driver_id)
                .await?
                .ok_or_else(|| not_found_error("Driver", &assignment.driver_id.to_string()))?;

            let user = self
                .users
                .find_by_id(driver.user_id)
                .await?
                .ok_or_else(|| not_found_error("User", &driver.user_id.to_string()))?;

            let vehicle = self
                .vehicles
                .find_by_id(assignment.vehicle_id)
                .await?
                .ok_or_else(|| not_found_error("Vehicle", &assignment.vehicle_id.to_string()))?;

            responses.push(AssignmentListResponse {
                id: assignment.id,
                driver: DriverResponse::from_parts(driver, UserResponse::from(user)),
                vehicle: VehicleResponse::from(vehicle),
                assignment_status: assignment.assignment_status,
                begin_at: assignment.begin_at,
                ends_at: assignment.ends_at,
            });
        }

        Ok(responses)
    }

    pub async fn count(&self, active: Option<bool>) -> AppResult<i64> {
        self.assignments.count(active).await
    }
}
