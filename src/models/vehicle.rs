//! Vehicle model
//!
//! Maps to the `vehicles` table. Vehicles are never hard-deleted; every
//! dependent table references them with ON DELETE RESTRICT.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Vehicle kind - maps to the ENUM vehicle_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "vehicle_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Motorcycle,
    Car,
    Truck,
    Bus,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vehicle_type: VehicleType,
    pub vin: String,
    pub license_plate: String,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub image_path: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub last_service_date: Option<NaiveDate>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
