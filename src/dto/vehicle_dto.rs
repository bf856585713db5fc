//! Vehicle DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleType};

use super::driver_dto::DriverResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub make: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    pub vehicle_type: VehicleType,

    pub vin: String,
    pub license_plate: String,

    #[validate(length(max = 20))]
    pub color: Option<String>,

    pub mileage: Option<i32>,
    pub image_path: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub last_service_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(max = 20))]
    pub color: Option<String>,

    pub mileage: Option<i32>,
    pub image_path: Option<String>,
    pub last_service_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct VehicleResponse {
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
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            vehicle_type: vehicle.vehicle_type,
            vin: vehicle.vin,
            license_plate: vehicle.license_plate,
            color: vehicle.color,
            mileage: vehicle.mileage,
            image_path: vehicle.image_path,
            purchase_date: vehicle.purchase_date,
            last_service_date: vehicle.last_service_date,
            created_at: vehicle.created_at,
        }
    }
}

/// Listing entry: vehicle plus its current driver, if any
#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    #[serde(flatten)]
    pub vehicle: VehicleResponse,
    pub driver: Option<DriverResponse>,
}
