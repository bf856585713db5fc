//! Driver model
//!
//! A driver wraps a user account 1:1 and carries the driving license
//! details with its validity window.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Driving license category - maps to the ENUM license_category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "license_category")]
pub enum LicenseCategory {
    A,
    B,
    C,
    D1,
    D2,
    E,
    F,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub user_id: Uuid,
    pub license_number: String,
    pub license_category: LicenseCategory,
    pub license_file_path: Option<String>,
    pub delivery_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Driver {
    /// A license is valid while today is within [delivery_date, expiry_date).
    pub fn has_valid_license_on(&self, today: NaiveDate) -> bool {
        self.delivery_date <= today && today < self.expiry_date
    }

    pub fn has_valid_license(&self) -> bool {
        self.has_valid_license_on(Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(delivery: NaiveDate, expiry: NaiveDate) -> Driver {
        Driver {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            license_number: "DL-123456".to_string(),
            license_category: LicenseCategory::B,
            license_file_path: None,
            delivery_date: delivery,
            expiry_date: expiry,
            created_by: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_license_window_is_half_open() {
        let delivery = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let d = driver(delivery, expiry);

        assert!(d.has_valid_license_on(delivery));
        assert!(d.has_valid_license_on(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
        // expiry day itself is no longer valid
        assert!(!d.has_valid_license_on(expiry));
        assert!(!d.has_valid_license_on(delivery.pred_opt().unwrap()));
    }
}
