//! Driver DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::driver::{Driver, LicenseCategory};

use super::user_dto::UserResponse;

/// Registers the account and the driver profile in one call.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterDriverRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, message = "password must have at least 8 characters"))]
    pub password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_id: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub license_number: String,

    pub license_category: LicenseCategory,
    pub license_file_path: Option<String>,
    pub delivery_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 20))]
    pub license_number: Option<String>,

    pub license_category: Option<LicenseCategory>,
    pub license_file_path: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub user: UserResponse,
    pub license_number: String,
    pub license_category: LicenseCategory,
    pub license_file_path: Option<String>,
    pub delivery_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub has_valid_license: bool,
}

impl DriverResponse {
    pub fn from_parts(driver: Driver, user: UserResponse) -> Self {
        let has_valid_license = driver.has_valid_license();
        Self {
            id: driver.id,
            user,
            license_number: driver.license_number,
            license_category: driver.license_category,
            license_file_path: driver.license_file_path,
            delivery_date: driver.delivery_date,
            expiry_date: driver.expiry_date,
            has_valid_license,
        }
    }
}
