//! Partnership and partner models
//!
//! A partnership is the named contractual relationship; partners belong to
//! one and are only assignable as maintenance/fuel/document providers while
//! the partnership is ACTIVE.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Partnership lifecycle state - maps to the ENUM partnership_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "partnership_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PartnershipStatus {
    Active,
    Inactive,
    Terminated,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Partnership {
    pub id: Uuid,
    pub name: String,
    pub status: PartnershipStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub is_permanent: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Partner {
    pub id: Uuid,
    pub partnership_id: Uuid,
    pub email: String,
    pub address: String,
    pub website: Option<String>,
    pub phone_number: String,
    pub company_nif: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
