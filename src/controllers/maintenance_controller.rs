//! Vehicle maintenance controller

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceResponse, UpdateMaintenanceRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::services::cost_service::CostService;
use crate::utils::errors::{not_found_error, AppResult};

pub struct MaintenanceController {
    maintenances: MaintenanceRepository,
    cost_service: CostService,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            maintenances: MaintenanceRepository::new(pool.clone()),
            cost_service: CostService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<MaintenanceResponse>> {
        request.validate()?;

        let (maintenance, issue_ids) =
            self.cost_service.create_maintenance(request, created_by).await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceResponse::from_parts(maintenance, issue_ids),
            "maintenance created".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> AppResult<ApiResponse<MaintenanceResponse>> {
        request.validate()?;

        let (maintenance, issue_ids) = self.cost_service.update_maintenance(id, request).await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceResponse::from_parts(maintenance, issue_ids),
            "maintenance updated".to_string(),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceResponse>> {
        let maintenances = self.maintenances.find_all().await?;

        let mut responses = Vec::with_capacity(maintenances.len());
        for maintenance in maintenances {
            let issue_ids = self.maintenances.issue_ids(maintenance.id).await?;
            responses.push(MaintenanceResponse::from_parts(maintenance, issue_ids));
        }

        Ok(responses)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceResponse> {
        let maintenance = self
            .maintenances
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Maintenance", &id.to_string()))?;

        let issue_ids = self.maintenances.issue_ids(maintenance.id).await?;

        Ok(MaintenanceResponse::from_parts(maintenance, issue_ids))
    }
}
