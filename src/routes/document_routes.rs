use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::document_controller::DocumentController;
use crate::dto::document_dto::{
    CreateDocumentCostRequest, CreateDocumentRequest, DocumentCostResponse, DocumentResponse,
    UpdateDocumentCostRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_document_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_document))
        .route("/", get(list_documents))
        .route("/:id", get(get_document))
}

pub fn create_document_cost_router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_document_cost))
        .route("/", get(list_document_costs))
        .route("/:id", put(update_document_cost))
}

async fn create_document(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.create(request, Some(user.user_id)).await?;
    Ok(Json(response))
}

async fn list_documents(
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn record_document_cost(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateDocumentCostRequest>,
) -> Result<Json<ApiResponse<DocumentCostResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.record_cost(request, Some(user.user_id)).await?;
    Ok(Json(response))
}

async fn update_document_cost(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDocumentCostRequest>,
) -> Result<Json<ApiResponse<DocumentCostResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.update_cost(id, request).await?;
    Ok(Json(response))
}

async fn list_document_costs(
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentCostResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.list_costs().await?;
    Ok(Json(response))
}
