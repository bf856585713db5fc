//! Issue report controller

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::issue_report_dto::{
    CreateIssueReportRequest, IssueReportResponse, SetIssueCostRequest,
};
use crate::dto::ApiResponse;
use crate::models::issue_report::IssuePriority;
use crate::repositories::{
    issue_report_repository::IssueReportRepository, vehicle_repository::VehicleRepository,
};
use crate::services::cost_service::CostService;
use crate::utils::errors::{not_found_error, AppResult};

pub struct IssueReportController {
    issues: IssueReportRepository,
    vehicles: VehicleRepository,
    cost_service: CostService,
}

impl IssueReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            issues: IssueReportRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            cost_service: CostService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateIssueReportRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<IssueReportResponse>> {
        request.validate()?;

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;

        let report = self
            .issues
            .create(
                &request.name,
                request.vehicle_id,
                request.priority.unwrap_or(IssuePriority::Medium),
                &request.description,
                created_by,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            IssueReportResponse::from(report),
            "issue report created".to_string(),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<IssueReportResponse>> {
        let reports = self.issues.find_all().await?;
        Ok(reports.into_iter().map(IssueReportResponse::from).collect())
    }

    pub async fn list_reviewable(&self) -> AppResult<Vec<IssueReportResponse>> {
        let reports = self.issues.find_reviewable().await?;
        Ok(reports.into_iter().map(IssueReportResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<IssueReportResponse> {
        let report = self
            .issues
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Issue report", &id.to_string()))?;

        Ok(IssueReportResponse::from(report))
    }

    pub async fn set_cost(
        &self,
        id: Uuid,
        request: SetIssueCostRequest,
    ) -> AppResult<ApiResponse<IssueReportResponse>> {
        let report = self.cost_service.set_issue_cost(id, request.issue_cost).await?;

        Ok(ApiResponse::success_with_message(
            IssueReportResponse::from(report),
            "issue cost set".to_string(),
        ))
    }
}
