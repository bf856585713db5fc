//! Issue report model
//!
//! A reported vehicle defect. `issue_cost` stays NULL until priced; once
//! the issue is fixed the cost is immutable.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Issue priority - maps to the ENUM issue_priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "issue_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IssueReport {
    pub id: Uuid,
    pub name: String,
    pub vehicle_id: Uuid,
    pub priority: IssuePriority,
    pub description: String,
    pub issue_cost: Option<Decimal>,
    pub is_fixed: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
