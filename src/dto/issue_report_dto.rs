//! Issue report DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::issue_report::{IssuePriority, IssueReport};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateIssueReportRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub vehicle_id: Uuid,
    pub priority: Option<IssuePriority>,

    #[validate(length(min = 1))]
    pub description: String,
}

/// Prices an issue; the derived maintenance totals are recomputed in the
/// same transaction.
#[derive(Debug, Deserialize)]
pub struct SetIssueCostRequest {
    pub issue_cost: Decimal,
}

#[derive(Debug, Serialize)]
pub struct IssueReportResponse {
    pub id: Uuid,
    pub name: String,
    pub vehicle_id: Uuid,
    pub priority: IssuePriority,
    pub description: String,
    pub issue_cost: Option<Decimal>,
    pub is_fixed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<IssueReport> for IssueReportResponse {
    fn from(r: IssueReport) -> Self {
        Self {
            id: r.id,
            name: r.name,
            vehicle_id: r.vehicle_id,
            priority: r.priority,
            description: r.description,
            issue_cost: r.issue_cost,
            is_fixed: r.is_fixed,
            created_at: r.created_at,
        }
    }
}
