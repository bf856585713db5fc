//! Partnership and partner DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::partner::{Partner, Partnership, PartnershipStatus};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePartnershipRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub status: Option<PartnershipStatus>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,

    #[serde(default)]
    pub is_permanent: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePartnerRequest {
    pub partnership_id: Uuid,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 200))]
    pub address: String,

    #[validate(url)]
    pub website: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub phone_number: String,

    pub company_nif: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PartnershipResponse {
    pub id: Uuid,
    pub name: String,
    pub status: PartnershipStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub is_permanent: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Partnership> for PartnershipResponse {
    fn from(p: Partnership) -> Self {
        Self {
            id: p.id,
            name: p.name,
            status: p.status,
            start_date: p.start_date,
            end_date: p.end_date,
            description: p.description,
            is_permanent: p.is_permanent,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PartnerResponse {
    pub id: Uuid,
    pub partnership_id: Uuid,
    pub email: String,
    pub address: String,
    pub website: Option<String>,
    pub phone_number: String,
    pub company_nif: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Partner> for PartnerResponse {
    fn from(p: Partner) -> Self {
        Self {
            id: p.id,
            partnership_id: p.partnership_id,
            email: p.email,
            address: p.address,
            website: p.website,
            phone_number: p.phone_number,
            company_nif: p.company_nif,
            created_at: p.created_at,
        }
    }
}
