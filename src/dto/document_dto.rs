//! Document and document cost DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::document::{Document, DocumentCategory, DocumentCost, DocumentKind, DocumentOwner};
use crate::models::maintenance::PaymentMethod;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub document_type: DocumentKind,
    pub document_category: Option<DocumentCategory>,
    pub issued_to: DocumentOwner,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,

    #[serde(default)]
    pub is_renewable: bool,

    pub validity_period: Option<i32>,
    pub renewal_frequency: Option<i32>,
    pub issuing_authority_id: Option<Uuid>,
    pub exp_begin_date: Option<NaiveDate>,
    pub exp_end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub image_path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
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
    pub created_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(d: Document) -> Self {
        Self {
            id: d.id,
            name: d.name,
            document_type: d.document_type,
            document_category: d.document_category,
            issued_to: d.issued_to,
            vehicle_id: d.vehicle_id,
            driver_id: d.driver_id,
            is_renewable: d.is_renewable,
            validity_period: d.validity_period,
            renewal_frequency: d.renewal_frequency,
            issuing_authority_id: d.issuing_authority_id,
            exp_begin_date: d.exp_begin_date,
            exp_end_date: d.exp_end_date,
            description: d.description,
            image_path: d.image_path,
            created_at: d.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateDocumentCostRequest {
    pub document_id: Uuid,
    pub payment_date: Option<NaiveDate>,
    pub payment_amount: Option<Decimal>,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDocumentCostRequest {
    pub payment_date: Option<NaiveDate>,
    pub payment_amount: Option<Decimal>,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DocumentCostResponse {
    pub id: Uuid,
    pub document_id: Uuid,
    pub payment_date: Option<NaiveDate>,
    pub payment_amount: Option<Decimal>,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DocumentCost> for DocumentCostResponse {
    fn from(c: DocumentCost) -> Self {
        Self {
            id: c.id,
            document_id: c.document_id,
            payment_date: c.payment_date,
            payment_amount: c.payment_amount,
            payment_method: c.payment_method,
            notes: c.notes,
            created_at: c.created_at,
        }
    }
}
