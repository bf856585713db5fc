use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::dashboard_dto::VehicleHistoryResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleListResponse, VehicleResponse,
};
use crate::dto::{ApiResponse, CountResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/count", get(count_vehicles))
        .route("/mine", get(my_vehicle))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id/history", get(vehicle_history))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request, Some(user.user_id)).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleListResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleListResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn count_vehicles(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let count = controller.count().await?;
    Ok(Json(CountResponse::new(count)))
}

async fn vehicle_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleHistoryResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.history(id).await?;
    Ok(Json(response))
}

async fn my_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    match controller.assigned_to_user(user.user_id).await? {
        Some(vehicle) => Ok(Json(ApiResponse::success(vehicle))),
        None => Ok(Json(ApiResponse::message_only(
            "no vehicle currently assigned".to_string(),
        ))),
    }
}
