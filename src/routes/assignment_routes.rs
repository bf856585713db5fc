use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::assignment_controller::AssignmentController;
use crate::dto::assignment_dto::{
    AssignmentCountQuery, AssignmentListResponse, AssignmentResponse, CreateAssignmentRequest,
};
use crate::dto::{ApiResponse, CountResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_assignment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment))
        .route("/", get(list_assignments))
        .route("/count", get(count_assignments))
        .route("/vehicle/:vehicle_id/deactivate", post(deactivate_assignment))
}

async fn create_assignment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateAssignmentRequest>,
) -> Result<Json<ApiResponse<AssignmentResponse>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.create(request, Some(user.user_id)).await?;
    Ok(Json(response))
}

async fn deactivate_assignment(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<ApiResponse<AssignmentResponse>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.deactivate(vehicle_id).await?;
    Ok(Json(response))
}

async fn list_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssignmentListResponse>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn count_assignments(
    State(state): State<AppState>,
    Query(query): Query<AssignmentCountQuery>,
) -> Result<Json<CountResponse>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let count = controller.count(query.active).await?;
    Ok(Json(CountResponse::new(count)))
}
