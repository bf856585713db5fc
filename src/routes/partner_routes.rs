use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::partner_controller::PartnerController;
use crate::dto::partner_dto::{
    CreatePartnerRequest, CreatePartnershipRequest, PartnerResponse, PartnershipResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_partnership_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_partnership))
        .route("/", get(list_partnerships))
}

pub fn create_partner_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_partner))
        .route("/", get(list_partners))
}

async fn create_partnership(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreatePartnershipRequest>,
) -> Result<Json<ApiResponse<PartnershipResponse>>, AppError> {
    let controller = PartnerController::new(state.pool.clone());
    let response = controller.create_partnership(request, Some(user.user_id)).await?;
    Ok(Json(response))
}

async fn list_partnerships(
    State(state): State<AppState>,
) -> Result<Json<Vec<PartnershipResponse>>, AppError> {
    let controller = PartnerController::new(state.pool.clone());
    let response = controller.list_partnerships().await?;
    Ok(Json(response))
}

async fn create_partner(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreatePartnerRequest>,
) -> Result<Json<ApiResponse<PartnerResponse>>, AppError> {
    let controller = PartnerController::new(state.pool.clone());
    let response = controller.create_partner(request, Some(user.user_id)).await?;
    Ok(Json(response))
}

async fn list_partners(
    State(state): State<AppState>,
) -> Result<Json<Vec<PartnerResponse>>, AppError> {
    let controller = PartnerController::new(state.pool.clone());
    let response = controller.list_partners().await?;
    Ok(Json(response))
}
