//! Cost propagation engine
//!
//! Every money-bearing write funnels through here. The rules:
//!   * maintenance `payment_amount` is the sum of its linked issue costs,
//!     NULL costs counting as zero, and is never accepted from a client
//!   * a PENDING maintenance with both dates set moves to APPROVED on save
//!   * an APPROVED maintenance with an end date mirrors into the ledger
//!   * document costs and fuel consumptions always mirror into the ledger
//! Each operation runs in a single transaction so a failed step leaves no
//! partial propagation behind.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::document_dto::{CreateDocumentCostRequest, UpdateDocumentCostRequest};
use crate::dto::fuel_dto::{CreateFuelConsumptionRequest, UpdateFuelConsumptionRequest};
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::models::document::DocumentCost;
use crate::models::financial_record::LedgerSource;
use crate::models::fuel::{FuelConsumption, QuantityUnit};
use crate::models::issue_report::IssueReport;
use crate::models::maintenance::{MaintenanceStatus, VehicleMaintenance};
use crate::repositories::{
    document_repository::DocumentRepository, financial_record_repository::FinancialRecordRepository,
    fuel_repository::FuelRepository, issue_report_repository::IssueReportRepository,
    maintenance_repository::MaintenanceRepository, partner_repository::PartnerRepository,
    vehicle_repository::VehicleRepository,
};
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// PENDING moves to APPROVED once both work dates are present. No other
/// transition happens automatically; in particular APPROVED never reverts.
pub fn evaluate_status(
    current: MaintenanceStatus,
    begin_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> MaintenanceStatus {
    if current == MaintenanceStatus::Pending && begin_date.is_some() && end_date.is_some() {
        MaintenanceStatus::Approved
    } else {
        current
    }
}

/// A maintenance mirrors into the ledger only once approved and finished.
pub fn mirrors_to_ledger(status: MaintenanceStatus, end_date: Option<NaiveDate>) -> bool {
    status == MaintenanceStatus::Approved && end_date.is_some()
}

/// Once an issue report is fixed its cost is frozen.
pub fn ensure_cost_mutable(issue: &IssueReport) -> Result<(), AppError> {
    if issue.is_fixed {
        return Err(AppError::InvalidState(
            "cost of a fixed issue report is immutable".to_string(),
        ));
    }
    Ok(())
}

/// Clients may echo the stored status or move to REJECTED/CANCELED.
/// APPROVED is derived from the work dates and is never set directly.
pub fn status_change_allowed(current: MaintenanceStatus, requested: MaintenanceStatus) -> bool {
    requested == current || requested.is_terminal()
}

pub struct CostService {
    pool: PgPool,
    documents: DocumentRepository,
    fuels: FuelRepository,
    partners: PartnerRepository,
    vehicles: VehicleRepository,
}

impl CostService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            documents: DocumentRepository::new(pool.clone()),
            fuels: FuelRepository::new(pool.clone()),
            partners: PartnerRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            pool,
        }
    }

    async fn check_partner(&self, partner_id: Uuid) -> AppResult<()> {
        self.partners
            .find_partner(partner_id)
            .await?
            .ok_or_else(|| not_found_error("Partner", &partner_id.to_string()))?;

        self.partners
            .find_active_partner(partner_id)
            .await?
            .ok_or_else(|| {
                AppError::InvalidState(
                    "partner does not belong to an active partnership".to_string(),
                )
            })?;

        Ok(())
    }

    /// Creates a maintenance, links its issue reports and derives amount,
    /// status and ledger mirror in one transaction.
    pub async fn create_maintenance(
        &self,
        request: CreateMaintenanceRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<(VehicleMaintenance, Vec<Uuid>)> {
        if let (Some(begin), Some(end)) = (request.maintenance_begin_date, request.maintenance_end_date)
        {
            if begin > end {
                return Err(AppError::Validation(
                    "maintenance begin date must not be after its end date".to_string(),
                ));
            }
        }

        if let Some(partner_id) = request.partner_id {
            self.check_partner(partner_id).await?;
        }

        let mut tx = self.pool.begin().await?;

        let status = evaluate_status(
            MaintenanceStatus::Pending,
            request.maintenance_begin_date,
            request.maintenance_end_date,
        );

        let maintenance = MaintenanceRepository::create_tx(
            &mut *tx,
            request.name.as_deref(),
            status,
            request.maintenance_begin_date,
            request.maintenance_end_date,
            request.payment_date,
            request.payment_method,
            request.partner_id,
            created_by,
        )
        .await?;

        for issue_id in &request.issue_report_ids {
            let issue = IssueReportRepository::find_by_id_tx(&mut *tx, *issue_id)
                .await?
                .ok_or_else(|| not_found_error("Issue report", &issue_id.to_string()))?;

            if issue.is_fixed {
                return Err(AppError::InvalidState(format!(
                    "issue report '{}' is already fixed",
                    issue.name
                )));
            }

            MaintenanceRepository::link_issue_tx(&mut *tx, maintenance.id, *issue_id).await?;
        }

        let amount = MaintenanceRepository::sum_issue_costs_tx(&mut *tx, maintenance.id).await?;
        let maintenance =
            MaintenanceRepository::apply_derived_tx(&mut *tx, maintenance.id, amount, status).await?;

        if mirrors_to_ledger(maintenance.status, maintenance.maintenance_end_date) {
            FinancialRecordRepository::upsert_tx(
                &mut *tx,
                LedgerSource::Maintenance(maintenance.id),
                maintenance.payment_amount,
                maintenance.payment_method,
                maintenance.payment_date,
            )
            .await?;
        }

        tx.commit().await?;

        Ok((maintenance, request.issue_report_ids))
    }

    pub async fn update_maintenance(
        &self,
        id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> AppResult<(VehicleMaintenance, Vec<Uuid>)> {
        if let Some(partner_id) = request.partner_id {
            self.check_partner(partner_id).await?;
        }

        let mut tx = self.pool.begin().await?;

        let current = MaintenanceRepository::find_by_id_tx(&mut *tx, id)
            .await?
            .ok_or_else(|| not_found_error("Maintenance", &id.to_string()))?;

        if let Some(requested) = request.status {
            if !status_change_allowed(current.status, requested) {
                return Err(AppError::InvalidState(
                    "maintenance status can only be set to rejected or canceled".to_string(),
                ));
            }
        }

        if current.status.is_terminal() && request.issue_report_ids.is_some() {
            return Err(AppError::InvalidState(
                "cannot relink issues on a rejected or canceled maintenance".to_string(),
            ));
        }

        let name = request.name.or(current.name);
        let begin_date = request
            .maintenance_begin_date
            .or(current.maintenance_begin_date);
        let end_date = request.maintenance_end_date.or(current.maintenance_end_date);
        let payment_date = request.payment_date.or(current.payment_date);
        let payment_method = request.payment_method.unwrap_or(current.payment_method);
        let partner_id = request.partner_id.or(current.partner_id);
        let requested_status = request.status.unwrap_or(current.status);

        if let (Some(begin), Some(end)) = (begin_date, end_date) {
            if begin > end {
                return Err(AppError::Validation(
                    "maintenance begin date must not be after its end date".to_string(),
                ));
            }
        }

        let status = evaluate_status(requested_status, begin_date, end_date);

        MaintenanceRepository::update_tx(
            &mut *tx,
            id,
            name.as_deref(),
            status,
            begin_date,
            end_date,
            payment_date,
            payment_method,
            partner_id,
        )
        .await?
        .ok_or_else(|| not_found_error("Maintenance", &id.to_string()))?;

        if let Some(issue_ids) = &request.issue_report_ids {
            MaintenanceRepository::clear_issues_tx(&mut *tx, id).await?;
            for issue_id in issue_ids {
                IssueReportRepository::find_by_id_tx(&mut *tx, *issue_id)
                    .await?
                    .ok_or_else(|| not_found_error("Issue report", &issue_id.to_string()))?;
                MaintenanceRepository::link_issue_tx(&mut *tx, id, *issue_id).await?;
            }
        }

        let amount = MaintenanceRepository::sum_issue_costs_tx(&mut *tx, id).await?;
        let maintenance = MaintenanceRepository::apply_derived_tx(&mut *tx, id, amount, status).await?;

        if mirrors_to_ledger(maintenance.status, maintenance.maintenance_end_date) {
            FinancialRecordRepository::upsert_tx(
                &mut *tx,
                LedgerSource::Maintenance(maintenance.id),
                maintenance.payment_amount,
                maintenance.payment_method,
                maintenance.payment_date,
            )
            .await?;
        }

        let issue_ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT issue_report_id FROM maintenance_issue_reports WHERE maintenance_id = $1",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((maintenance, issue_ids))
    }

    /// Prices an issue report and recomputes every dependent maintenance
    /// in the same transaction, re-mirroring ledger rows where needed.
    pub async fn set_issue_cost(&self, issue_id: Uuid, cost: Decimal) -> AppResult<IssueReport> {
        if cost < Decimal::ZERO {
            return Err(AppError::Validation(
                "issue cost must not be negative".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let issue = IssueReportRepository::find_by_id_tx(&mut *tx, issue_id)
            .await?
            .ok_or_else(|| not_found_error("Issue report", &issue_id.to_string()))?;

        ensure_cost_mutable(&issue)?;

        let issue = IssueReportRepository::set_cost_tx(&mut *tx, issue_id, cost)
            .await?
            .ok_or_else(|| not_found_error("Issue report", &issue_id.to_string()))?;

        let targets = MaintenanceRepository::recompute_targets_tx(&mut *tx, issue_id).await?;
        for maintenance in targets {
            let amount =
                MaintenanceRepository::sum_issue_costs_tx(&mut *tx, maintenance.id).await?;
            let status = evaluate_status(
                maintenance.status,
                maintenance.maintenance_begin_date,
                maintenance.maintenance_end_date,
            );
            let updated =
                MaintenanceRepository::apply_derived_tx(&mut *tx, maintenance.id, amount, status)
                    .await?;

            if mirrors_to_ledger(updated.status, updated.maintenance_end_date) {
                FinancialRecordRepository::upsert_tx(
                    &mut *tx,
                    LedgerSource::Maintenance(updated.id),
                    updated.payment_amount,
                    updated.payment_method,
                    updated.payment_date,
                )
                .await?;
            }
        }

        tx.commit().await?;

        Ok(issue)
    }

    pub async fn record_document_cost(
        &self,
        request: CreateDocumentCostRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<DocumentCost> {
        self.documents
            .find_by_id(request.document_id)
            .await?
            .ok_or_else(|| not_found_error("Document", &request.document_id.to_string()))?;

        if let Some(amount) = request.payment_amount {
            if amount < Decimal::ZERO {
                return Err(AppError::Validation(
                    "payment amount must not be negative".to_string(),
                ));
            }
        }

        let mut tx = self.pool.begin().await?;

        let cost = DocumentRepository::create_cost_tx(
            &mut *tx,
            request.document_id,
            request.payment_date,
            request.payment_amount,
            request.payment_method,
            request.notes.as_deref(),
            created_by,
        )
        .await?;

        FinancialRecordRepository::upsert_tx(
            &mut *tx,
            LedgerSource::DocumentCost(cost.id),
            cost.payment_amount,
            cost.payment_method,
            cost.payment_date,
        )
        .await?;

        tx.commit().await?;

        Ok(cost)
    }

    pub async fn update_document_cost(
        &self,
        id: Uuid,
        request: UpdateDocumentCostRequest,
    ) -> AppResult<DocumentCost> {
        if let Some(amount) = request.payment_amount {
            if amount < Decimal::ZERO {
                return Err(AppError::Validation(
                    "payment amount must not be negative".to_string(),
                ));
            }
        }

        let mut tx = self.pool.begin().await?;

        let cost = DocumentRepository::update_cost_tx(
            &mut *tx,
            id,
            request.payment_date,
            request.payment_amount,
            request.payment_method,
            request.notes.as_deref(),
        )
        .await?
        .ok_or_else(|| not_found_error("Document cost", &id.to_string()))?;

        FinancialRecordRepository::upsert_tx(
            &mut *tx,
            LedgerSource::DocumentCost(cost.id),
            cost.payment_amount,
            cost.payment_method,
            cost.payment_date,
        )
        .await?;

        tx.commit().await?;

        Ok(cost)
    }

    pub async fn record_fuel_consumption(
        &self,
        request: CreateFuelConsumptionRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<FuelConsumption> {
        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;

        self.fuels
            .find_fuel(request.fuel_id)
            .await?
            .ok_or_else(|| not_found_error("Fuel", &request.fuel_id.to_string()))?;

        self.check_partner(request.partner_id).await?;

        if let Some(amount) = request.payment_amount {
            if amount < Decimal::ZERO {
                return Err(AppError::Validation(
                    "payment amount must not be negative".to_string(),
                ));
            }
        }

        let mut tx = self.pool.begin().await?;

        let consumption = FuelRepository::create_consumption_tx(
            &mut *tx,
            request.vehicle_id,
            request.fuel_id,
            request.partner_id,
            request.quantity_unit.unwrap_or(QuantityUnit::Liter),
            request.quantity,
            request.payment_date,
            request.payment_amount,
            request.payment_method,
            created_by,
        )
        .await?;

        FinancialRecordRepository::upsert_tx(
            &mut *tx,
            LedgerSource::FuelConsumption(consumption.id),
            consumption.payment_amount,
            consumption.payment_method,
            consumption.payment_date,
        )
        .await?;

        tx.commit().await?;

        Ok(consumption)
    }

    pub async fn update_fuel_consumption(
        &self,
        id: Uuid,
        request: UpdateFuelConsumptionRequest,
    ) -> AppResult<FuelConsumption> {
        if let Some(amount) = request.payment_amount {
            if amount < Decimal::ZERO {
                return Err(AppError::Validation(
                    "payment amount must not be negative".to_string(),
                ));
            }
        }

        let mut tx = self.pool.begin().await?;

        let consumption = FuelRepository::update_consumption_tx(
            &mut *tx,
            id,
            request.quantity_unit,
            request.quantity,
            request.payment_date,
            request.payment_amount,
            request.payment_method,
        )
        .await?
        .ok_or_else(|| not_found_error("Fuel consumption", &id.to_string()))?;

        FinancialRecordRepository::upsert_tx(
            &mut *tx,
            LedgerSource::FuelConsumption(consumption.id),
            consumption.payment_amount,
            consumption.payment_method,
            consumption.payment_date,
        )
        .await?;

        tx.commit().await?;

        Ok(consumption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_pending_approves_only_with_both_dates() {
        let begin = Some(date(2026, 1, 10));
        let end = Some(date(2026, 1, 20));

        assert_eq!(
            evaluate_status(MaintenanceStatus::Pending, begin, end),
            MaintenanceStatus::Approved
        );
        assert_eq!(
            evaluate_status(MaintenanceStatus::Pending, begin, None),
            MaintenanceStatus::Pending
        );
        assert_eq!(
            evaluate_status(MaintenanceStatus::Pending, None, end),
            MaintenanceStatus::Pending
        );
    }

    #[test]
    fn test_terminal_statuses_never_auto_approve() {
        let begin = Some(date(2026, 1, 10));
        let end = Some(date(2026, 1, 20));

        assert_eq!(
            evaluate_status(MaintenanceStatus::Rejected, begin, end),
            MaintenanceStatus::Rejected
        );
        assert_eq!(
            evaluate_status(MaintenanceStatus::Canceled, begin, end),
            MaintenanceStatus::Canceled
        );
        assert_eq!(
            evaluate_status(MaintenanceStatus::Approved, begin, end),
            MaintenanceStatus::Approved
        );
    }

    #[test]
    fn test_ledger_mirror_requires_approved_and_finished() {
        let end = Some(date(2026, 1, 20));

        assert!(mirrors_to_ledger(MaintenanceStatus::Approved, end));
        assert!(!mirrors_to_ledger(MaintenanceStatus::Approved, None));
        assert!(!mirrors_to_ledger(MaintenanceStatus::Pending, end));
        assert!(!mirrors_to_ledger(MaintenanceStatus::Rejected, end));
    }

    fn issue(is_fixed: bool, issue_cost: Option<Decimal>) -> IssueReport {
        IssueReport {
            id: Uuid::new_v4(),
            name: "worn brake pads".to_string(),
            vehicle_id: Uuid::new_v4(),
            priority: crate::models::issue_report::IssuePriority::High,
            description: "front pads below wear limit".to_string(),
            issue_cost,
            is_fixed,
            created_by: None,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_fixed_issue_cost_is_immutable() {
        let fixed = issue(true, Some(Decimal::new(12000, 2)));

        assert!(matches!(
            ensure_cost_mutable(&fixed),
            Err(AppError::InvalidState(_))
        ));
        // The guard runs before any write, so the stored cost stays as is.
        assert_eq!(fixed.issue_cost, Some(Decimal::new(12000, 2)));

        assert!(ensure_cost_mutable(&issue(false, None)).is_ok());
        assert!(ensure_cost_mutable(&issue(false, Some(Decimal::ZERO))).is_ok());
    }

    #[test]
    fn test_clients_cannot_set_approved_directly() {
        use MaintenanceStatus::*;

        assert!(!status_change_allowed(Pending, Approved));
        assert!(!status_change_allowed(Approved, Pending));
        assert!(!status_change_allowed(Rejected, Pending));

        assert!(status_change_allowed(Pending, Rejected));
        assert!(status_change_allowed(Pending, Canceled));
        assert!(status_change_allowed(Approved, Canceled));

        // Echoing the stored status keeps PUT idempotent.
        assert!(status_change_allowed(Pending, Pending));
        assert!(status_change_allowed(Approved, Approved));
    }
}
