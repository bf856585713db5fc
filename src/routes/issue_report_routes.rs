use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::issue_report_controller::IssueReportController;
use crate::dto::issue_report_dto::{
    CreateIssueReportRequest, IssueReportResponse, SetIssueCostRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_issue_report_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_issue_report))
        .route("/", get(list_issue_reports))
        .route("/reviewable", get(list_reviewable))
        .route("/:id", get(get_issue_report))
        .route("/:id/cost", post(set_issue_cost))
}

async fn create_issue_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateIssueReportRequest>,
) -> Result<Json<ApiResponse<IssueReportResponse>>, AppError> {
    let controller = IssueReportController::new(state.pool.clone());
    let response = controller.create(request, Some(user.user_id)).await?;
    Ok(Json(response))
}

async fn list_issue_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<IssueReportResponse>>, AppError> {
    let controller = IssueReportController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn list_reviewable(
    State(state): State<AppState>,
) -> Result<Json<Vec<IssueReportResponse>>, AppError> {
    let controller = IssueReportController::new(state.pool.clone());
    let response = controller.list_reviewable().await?;
    Ok(Json(response))
}

async fn get_issue_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<IssueReportResponse>, AppError> {
    let controller = IssueReportController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn set_issue_cost(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetIssueCostRequest>,
) -> Result<Json<ApiResponse<IssueReportResponse>>, AppError> {
    let controller = IssueReportController::new(state.pool.clone());
    let response = controller.set_cost(id, request).await?;
    Ok(Json(response))
}
