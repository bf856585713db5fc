//! Vehicle maintenance model
//!
//! A repair job aggregating one or more issue reports. `payment_amount`
//! is derived from the linked issue costs and never user-set; status moves
//! PENDING -> APPROVED automatically once both dates are present.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Payment method - maps to the ENUM payment_method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "payment_method", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Bank,
    Mobile,
}

/// Maintenance lifecycle state - maps to the ENUM maintenance_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "maintenance_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    Pending,
    Approved,
    Rejected,
    Canceled,
}

impl MaintenanceStatus {
    /// REJECTED and CANCELED are terminal administrative states.
    pub fn is_terminal(self) -> bool {
        matches!(self, MaintenanceStatus::Rejected | MaintenanceStatus::Canceled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleMaintenance {
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
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
