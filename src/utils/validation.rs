//! Validation helpers
//!
//! Field-level validators shared by the DTOs and controllers.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;
use validator::ValidationError;

/// Validate and convert a string to a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validate and convert a string to a date
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validate that a string is not empty
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validate a license plate number
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validate a vehicle identification number (17 alphanumeric characters)
pub fn validate_vin(value: &str) -> Result<(), ValidationError> {
    if value.len() != 17 || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        let mut error = ValidationError::new("vin");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"17 alphanumeric characters".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validate that a value is not negative
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validate that a date window is ordered (begin <= end)
pub fn validate_date_window(begin: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if begin > end {
        let mut error = ValidationError::new("date_window");
        error.add_param("begin".into(), &begin.to_string());
        error.add_param("end".into(), &end.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("invalid-uuid").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024/01/15").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("AB-123-CD").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn test_validate_vin() {
        assert!(validate_vin("1HGBH41JXMN109186").is_ok());
        assert!(validate_vin("TOO-SHORT").is_err());
        assert!(validate_vin("1HGBH41JXMN10918!").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0).is_ok());
        assert!(validate_non_negative(5).is_ok());
        assert!(validate_non_negative(-1).is_err());
    }

    #[test]
    fn test_validate_non_negative_decimal() {
        use rust_decimal_macros::dec;

        assert!(validate_non_negative(dec!(12.50)).is_ok());
        assert!(validate_non_negative(dec!(0.00)).is_ok());
        assert!(validate_non_negative(dec!(-0.01)).is_err());
    }

    #[test]
    fn test_validate_date_window() {
        let begin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(validate_date_window(begin, end).is_ok());
        assert!(validate_date_window(begin, begin).is_ok());
        assert!(validate_date_window(end, begin).is_err());
    }
}
