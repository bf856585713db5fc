//! Vehicle maintenance DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::{MaintenanceStatus, PaymentMethod, VehicleMaintenance};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    pub maintenance_begin_date: Option<NaiveDate>,
    pub maintenance_end_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: PaymentMethod,
    pub partner_id: Option<Uuid>,

    /// Issue reports this maintenance covers. Totals are derived from
    /// their costs, never accepted from the client.
    #[serde(default)]
    pub issue_report_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    pub status: Option<MaintenanceStatus>,
    pub maintenance_begin_date: Option<NaiveDate>,
    pub maintenance_end_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,
    pub partner_id: Option<Uuid>,
    pub issue_report_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub status: MaintenanceStatus,
    pub maintenance_begin_date: Option<NaiveDate>,
    pub maintenance_end_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub payment_amount: Option<Decimal>,
    pub payment_method: PaymentMethod,
    pub required_issue_report: bool,
    pub partner_id: Option<Uuid>,
    pub issue_report_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceResponse {
    pub fn from_parts(m: VehicleMaintenance, issue_report_ids: Vec<Uuid>) -> Self {
        Self {
            id: m.id,
            name: m.name,
            status: m.status,
            maintenance_begin_date: m.maintenance_begin_date,
            maintenance_end_date: m.maintenance_end_date,
            payment_date: m.payment_date,
            payment_amount: m.payment_amount,
            payment_method: m.payment_method,
            required_issue_report: m.required_issue_report,
            partner_id: m.partner_id,
            issue_report_ids,
            created_at: m.created_at,
        }
    }
}
