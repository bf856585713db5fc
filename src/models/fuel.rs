//! Fuel catalog and fuel consumption models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use super::maintenance::PaymentMethod;

/// Fuel type catalog entry (diesel, petrol, electricity, ...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fuel {
    pub id: Uuid,
    pub fuel_type: String,
    pub created_at: DateTime<Utc>,
}

/// Quantity unit - maps to the ENUM quantity_unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "quantity_unit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    Liter,
    Kwh,
}

/// One-off refuel/recharge payment event for a vehicle at a partner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelConsumption {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub fuel_id: Uuid,
    pub partner_id: Uuid,
    pub quantity_unit: QuantityUnit,
    pub quantity: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    pub payment_amount: Option<Decimal>,
    pub payment_method: PaymentMethod,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
