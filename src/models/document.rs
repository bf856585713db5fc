//! Document model
//!
//! Compliance paperwork issued to a vehicle or a driver. Renewable
//! documents must carry an expiration window; the controller enforces it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Document kind - maps to the ENUM document_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "document_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    InsuranceCertificate,
    RoadTax,
    VehicleInspectionReport,
    VehicleRegistrationDocument,
    Other,
}

/// Document category - maps to the ENUM document_category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "document_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Core,
    TrafficViolation,
}

/// Who the document is issued to - maps to the ENUM document_owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "document_owner", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DocumentOwner {
    Vehicle,
    Driver,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub document_type: DocumentKind,
    pub document_category: DocumentCategory,
    pub issued_to: DocumentOwner,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub is_renewable: bool,
    pub validity_period: Option<i32>,
    pub renewal_frequency: Option<i32>,
    pub issuing_authority_id: Option<Uuid>,
    pub exp_begin_date: Option<NaiveDate>,
    pub exp_end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One-off payment event tied to a document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentCost {
    pub id: Uuid,
    pub document_id: Uuid,
    pub payment_date: Option<NaiveDate>,
    pub payment_amount: Option<rust_decimal::Decimal>,
    pub payment_method: super::maintenance::PaymentMethod,
    pub notes: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
