use axum::{extract::State, middleware, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::SystemStatsResponse;
use crate::middleware::auth::staff_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(system_stats))
        .layer(middleware::from_fn(staff_middleware))
}

async fn system_stats(
    State(state): State<AppState>,
) -> Result<Json<SystemStatsResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.system_stats().await?;
    Ok(Json(response))
}
