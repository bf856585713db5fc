//! Fleet Hub
//!
//! Fleet administration backend: vehicles, drivers, assignments,
//! maintenance and the cost ledger behind them, exposed over a REST API.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Builds the full application router. Everything under /api except the
/// auth routes sits behind the JWT middleware.
pub fn create_app(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/api/users", routes::user_routes::create_user_router())
        .nest("/api/drivers", routes::driver_routes::create_driver_router())
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/technicians", routes::technician_routes::create_technician_router())
        .nest("/api/assignments", routes::assignment_routes::create_assignment_router())
        .nest("/api/partnerships", routes::partner_routes::create_partnership_router())
        .nest("/api/partners", routes::partner_routes::create_partner_router())
        .nest("/api/documents", routes::document_routes::create_document_router())
        .nest("/api/document-costs", routes::document_routes::create_document_cost_router())
        .nest("/api/fuels", routes::fuel_routes::create_fuel_router())
        .nest("/api/fuel-consumptions", routes::fuel_routes::create_fuel_consumption_router())
        .nest("/api/issue-reports", routes::issue_report_routes::create_issue_report_router())
        .nest("/api/maintenances", routes::maintenance_routes::create_maintenance_router())
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .layer(from_fn_with_state(state.clone(), auth_middleware));

    let cors = if state.config.is_development() || state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&state.config.cors_origins)
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "fleet-hub",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
