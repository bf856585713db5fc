//! Dashboard controller
//!
//! Fleet-wide counters for staff. Route-level middleware enforces the
//! staff gate before these run.

use sqlx::PgPool;

use crate::dto::dashboard_dto::SystemStatsResponse;
use crate::repositories::{
    assignment_repository::AssignmentRepository, driver_repository::DriverRepository,
    financial_record_repository::FinancialRecordRepository,
    issue_report_repository::IssueReportRepository, maintenance_repository::MaintenanceRepository,
    user_repository::UserRepository, vehicle_repository::VehicleRepository,
};
use crate::utils::errors::AppResult;

pub struct DashboardController {
    users: UserRepository,
    drivers: DriverRepository,
    vehicles: VehicleRepository,
    assignments: AssignmentRepository,
    maintenances: MaintenanceRepository,
    issues: IssueReportRepository,
    ledger: FinancialRecordRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool.clone()),
            maintenances: MaintenanceRepository::new(pool.clone()),
            issues: IssueReportRepository::new(pool.clone()),
            ledger: FinancialRecordRepository::new(pool),
        }
    }

    pub async fn system_stats(&self) -> AppResult<SystemStatsResponse> {
        Ok(SystemStatsResponse {
            total_users: self.users.count(None).await?,
            active_users: self.users.count(Some(true)).await?,
            total_drivers: self.drivers.count().await?,
            total_vehicles: self.vehicles.count().await?,
            active_assignments: self.assignments.count(Some(true)).await?,
            pending_maintenances: self.maintenances.count_pending().await?,
            unresolved_issues: self.issues.count_unresolved().await?,
            total_recorded_costs: self.ledger.total_cost().await?,
        })
    }
}
