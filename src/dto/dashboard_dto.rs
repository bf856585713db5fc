//! Dashboard and vehicle history DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use super::{
    assignment_dto::AssignmentResponse, document_dto::DocumentResponse,
    fuel_dto::FuelConsumptionResponse, issue_report_dto::IssueReportResponse,
    maintenance_dto::MaintenanceResponse,
};

/// Fleet-wide counters for the staff dashboard.
#[derive(Debug, Serialize)]
pub struct SystemStatsResponse {
    pub total_users: i64,
    pub active_users: i64,
    pub total_drivers: i64,
    pub total_vehicles: i64,
    pub active_assignments: i64,
    pub pending_maintenances: i64,
    pub unresolved_issues: i64,
    pub total_recorded_costs: Decimal,
}

/// Everything recorded against one vehicle, grouped by origin.
#[derive(Debug, Serialize)]
pub struct VehicleHistoryResponse {
    pub assignments: Vec<AssignmentResponse>,
    pub maintenances: Vec<MaintenanceResponse>,
    pub issue_reports: Vec<IssueReportResponse>,
    pub fuel_consumptions: Vec<FuelConsumptionResponse>,
    pub documents: Vec<DocumentResponse>,
}
