use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Extension, Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::{
    CreateUserRequest, UpdateUserStatusRequest, UserCountQuery, UserResponse,
};
use crate::dto::{ApiResponse, CountResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/", get(list_users))
        .route("/count", get(count_users))
        .route("/:id", get(get_user))
        .route("/:id/status", patch(update_user_status))
}

async fn create_user(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.create(request).await?;

    if let Some(created) = &response.data {
        let notifier = state.notifier();
        let payload = json!({ "user_id": created.id, "email": created.email });
        tokio::spawn(async move {
            notifier.notify("user.created", payload).await;
        });
    }

    Ok(Json(response))
}

async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_user_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserStatusRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.set_active(id, request.is_active).await?;
    Ok(Json(response))
}

async fn count_users(
    State(state): State<AppState>,
    Query(query): Query<UserCountQuery>,
) -> Result<Json<CountResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let count = controller.count(query.active).await?;
    Ok(Json(CountResponse::new(count)))
}
