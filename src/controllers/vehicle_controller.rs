//! Vehicle controller

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::assignment_dto::AssignmentResponse;
use crate::dto::dashboard_dto::VehicleHistoryResponse;
use crate::dto::document_dto::DocumentResponse;
use crate::dto::driver_dto::DriverResponse;
use crate::dto::fuel_dto::FuelConsumptionResponse;
use crate::dto::issue_report_dto::IssueReportResponse;
use crate::dto::maintenance_dto::MaintenanceResponse;
use crate::dto::user_dto::UserResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleListResponse, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::repositories::{
    assignment_repository::AssignmentRepository, document_repository::DocumentRepository,
    driver_repository::DriverRepository, fuel_repository::FuelRepository,
    issue_report_repository::IssueReportRepository, maintenance_repository::MaintenanceRepository,
    user_repository::UserRepository, vehicle_repository::VehicleRepository,
};
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};
use crate::utils::validation::{validate_license_plate, validate_vin};

pub struct VehicleController {
    vehicles: VehicleRepository,
    assignments: AssignmentRepository,
    drivers: DriverRepository,
    users: UserRepository,
    documents: DocumentRepository,
    fuels: FuelRepository,
    issues: IssueReportRepository,
    maintenances: MaintenanceRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            documents: DocumentRepository::new(pool.clone()),
            fuels: FuelRepository::new(pool.clone()),
            issues: IssueReportRepository::new(pool.clone()),
            maintenances: MaintenanceRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        validate_vin(&request.vin).map_err(|_| {
            AppError::Validation("vin must be 17 alphanumeric characters".to_string())
        })?;
        validate_license_plate(&request.license_plate)
            .map_err(|_| AppError::Validation("license plate is invalid".to_string()))?;

        if self.vehicles.find_by_vin(&request.vin).await?.is_some() {
            return Err(conflict_error("Vehicle", "vin", &request.vin));
        }
        if self
            .vehicles
            .find_by_license_plate(&request.license_plate)
            .await?
            .is_some()
        {
            return Err(conflict_error(
                "Vehicle",
                "license plate",
                &request.license_plate,
            ));
        }

        let vehicle = self
            .vehicles
            .create(
                &request.make,
                &request.model,
                request.year,
                request.vehicle_type,
                &request.vin,
                &request.license_plate,
                request.color.as_deref(),
                request.mileage,
                request.image_path.as_deref(),
                request.purchase_date,
                request.last_service_date,
                created_by,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "vehicle created".to_string(),
        ))
    }

    async fn current_driver(&self, vehicle_id: Uuid) -> AppResult<Option<DriverResponse>> {
        let Some(assignment) = self.assignments.active_for_vehicle(vehicle_id).await? else {
            return Ok(None);
        };

        let Some(driver) = self.drivers.find_by_id(assignment.driver_id).await? else {
            return Ok(None);
        };

        let user = self
            .users
            .find_by_id(driver.user_id)
            .await?
            .ok_or_else(|| not_found_error("User", &driver.user_id.to_string()))?;

        Ok(Some(DriverResponse::from_parts(driver, UserResponse::from(user))))
    }

    pub async fn list(&self) -> AppResult<Vec<VehicleListResponse>> {
        let vehicles = self.vehicles.find_all().await?;

        let mut responses = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles {
            let driver = self.current_driver(vehicle.id).await?;
            responses.push(VehicleListResponse {
                vehicle: VehicleResponse::from(vehicle),
                driver,
            });
        }

        Ok(responses)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<VehicleListResponse> {
        let vehicle = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        let driver = self.current_driver(vehicle.id).await?;

        Ok(VehicleListResponse {
            vehicle: VehicleResponse::from(vehicle),
            driver,
        })
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let vehicle = self
            .vehicles
            .update(
                id,
                request.color.as_deref(),
                request.mileage,
                request.image_path.as_deref(),
                request.last_service_date,
            )
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "vehicle updated".to_string(),
        ))
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.vehicles.count().await
    }

    /// Full activity trail of one vehicle.
    pub async fn history(&self, id: Uuid) -> AppResult<VehicleHistoryResponse> {
        self.vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        let assignments = self
            .assignments
            .find_for_vehicle(id)
            .await?
            .into_iter()
            .map(AssignmentResponse::from)
            .collect();

        let mut maintenances = Vec::new();
        for maintenance in self.maintenances.find_for_vehicle(id).await? {
            let issue_ids = self.maintenances.issue_ids(maintenance.id).await?;
            maintenances.push(MaintenanceResponse::from_parts(maintenance, issue_ids));
        }

        let issue_reports = self
            .issues
            .find_for_vehicle(id)
            .await?
            .into_iter()
            .map(IssueReportResponse::from)
            .collect();

        let fuel_consumptions = self
            .fuels
            .find_consumptions_for_vehicle(id)
            .await?
            .into_iter()
            .map(FuelConsumptionResponse::from)
            .collect();

        let documents = self
            .documents
            .find_for_vehicle(id)
            .await?
            .into_iter()
            .map(DocumentResponse::from)
            .collect();

        Ok(VehicleHistoryResponse {
            assignments,
            maintenances,
            issue_reports,
            fuel_consumptions,
            documents,
        })
    }

    /// The vehicle currently assigned to the calling driver, if any.
    pub async fn assigned_to_user(&self, user_id: Uuid) -> AppResult<Option<VehicleResponse>> {
        let Some(driver) = self.drivers.find_by_user_id(user_id).await? else {
            return Ok(None);
        };

        let Some(assignment) = self.assignments.active_for_driver(driver.id).await? else {
            return Ok(None);
        };

        let vehicle = self
            .vehicles
            .find_by_id(assignment.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &assignment.vehicle_id.to_string()))?;

        Ok(Some(VehicleResponse::from(vehicle)))
    }
}
