use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{DriverResponse, RegisterDriverRequest, UpdateDriverRequest};
use crate::dto::{ApiResponse, CountResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_driver))
        .route("/", get(list_drivers))
        .route("/count", get(count_drivers))
        .route("/:id", get(get_driver))
        .route("/:id", put(update_driver))
}

async fn register_driver(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<RegisterDriverRequest>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.register(request, Some(user.user_id)).await?;

    if let Some(driver) = &response.data {
        let notifier = state.notifier();
        let payload = json!({ "driver_id": driver.id, "email": driver.user.email });
        tokio::spawn(async move {
            notifier.notify("driver.registered", payload).await;
        });
    }

    Ok(Json(response))
}

async fn list_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DriverResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDriverRequest>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn count_drivers(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let count = controller.count().await?;
    Ok(Json(CountResponse::new(count)))
}
