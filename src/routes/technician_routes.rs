use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::technician_controller::TechnicianController;
use crate::dto::technician_dto::{CreateTechnicianRequest, TechnicianResponse};
use crate::dto::{ApiResponse, CountResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_technician_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_technician))
        .route("/", get(list_technicians))
        .route("/count", get(count_technicians))
}

async fn create_technician(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateTechnicianRequest>,
) -> Result<Json<ApiResponse<TechnicianResponse>>, AppError> {
    let controller = TechnicianController::new(state.pool.clone());
    let response = controller.create(request, Some(user.user_id)).await?;
    Ok(Json(response))
}

async fn list_technicians(
    State(state): State<AppState>,
) -> Result<Json<Vec<TechnicianResponse>>, AppError> {
    let controller = TechnicianController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn count_technicians(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let controller = TechnicianController::new(state.pool.clone());
    let count = controller.count().await?;
    Ok(Json(CountResponse::new(count)))
}
