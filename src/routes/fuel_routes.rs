use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::fuel_controller::FuelController;
use crate::dto::fuel_dto::{
    CreateFuelConsumptionRequest, CreateFuelRequest, FuelConsumptionResponse, FuelResponse,
    UpdateFuelConsumptionRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_fuel))
        .route("/", get(list_fuels))
}

pub fn create_fuel_consumption_router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_consumption))
        .route("/", get(list_consumptions))
        .route("/:id", put(update_consumption))
}

async fn create_fuel(
    State(state): State<AppState>,
    Json(request): Json<CreateFuelRequest>,
) -> Result<Json<ApiResponse<FuelResponse>>, AppError> {
    let controller = FuelController::new(state.pool.clone());
    let response = controller.create_fuel(request).await?;
    Ok(Json(response))
}

async fn list_fuels(
    State(state): State<AppState>,
) -> Result<Json<Vec<FuelResponse>>, AppError> {
    let controller = FuelController::new(state.pool.clone());
    let response = controller.list_fuels().await?;
    Ok(Json(response))
}

async fn record_consumption(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateFuelConsumptionRequest>,
) -> Result<Json<ApiResponse<FuelConsumptionResponse>>, AppError> {
    let controller = FuelController::new(state.pool.clone());
    let response = controller.record_consumption(request, Some(user.user_id)).await?;
    Ok(Json(response))
}

async fn update_consumption(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFuelConsumptionRequest>,
) -> Result<Json<ApiResponse<FuelConsumptionResponse>>, AppError> {
    let controller = FuelController::new(state.pool.clone());
    let response = controller.update_consumption(id, request).await?;
    Ok(Json(response))
}

async fn list_consumptions(
    State(state): State<AppState>,
) -> Result<Json<Vec<FuelConsumptionResponse>>, AppError> {
    let controller = FuelController::new(state.pool.clone());
    let response = controller.list_consumptions().await?;
    Ok(Json(response))
}
