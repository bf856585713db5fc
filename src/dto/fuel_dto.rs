//! Fuel catalog and fuel consumption DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fuel::{Fuel, FuelConsumption, QuantityUnit};
use crate::models::maintenance::PaymentMethod;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelRequest {
    #[validate(length(min = 1, max = 50))]
    pub fuel_type: String,
}

#[derive(Debug, Serialize)]
pub struct FuelResponse {
    pub id: Uuid,
    pub fuel_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<Fuel> for FuelResponse {
    fn from(f: Fuel) -> Self {
        Self { id: f.id, fuel_type: f.fuel_type, created_at: f.created_at }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateFuelConsumptionRequest {
    pub vehicle_id: Uuid,
    pub fuel_id: Uuid,
    pub partner_id: Uuid,
    pub quantity_unit: Option<QuantityUnit>,
    pub quantity: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    pub payment_amount: Option<Decimal>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFuelConsumptionRequest {
    pub quantity_unit: Option<QuantityUnit>,
    pub quantity: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    pub payment_amount: Option<Decimal>,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Serialize)]
pub struct FuelConsumptionResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub fuel_id: Uuid,
    pub partner_id: Uuid,
    pub quantity_unit: QuantityUnit,
    pub quantity: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    pub payment_amount: Option<Decimal>,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

impl From<FuelConsumption> for FuelConsumptionResponse {
    fn from(c: FuelConsumption) -> Self {
        Self {
            id: c.id,
            vehicle_id: c.vehicle_id,
            fuel_id: c.fuel_id,
            partner_id: c.partner_id,
            quantity_unit: c.quantity_unit,
            quantity: c.quantity,
            payment_date: c.payment_date,
            payment_amount: c.payment_amount,
            payment_method: c.payment_method,
            created_at: c.created_at,
        }
    }
}
