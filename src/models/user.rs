//! User model
//!
//! Account record behind every driver, technician and staff member.
//! Maps to the `users` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_id: Option<String>,
    pub is_staff: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        match (&self.last_name, &self.first_name) {
            (Some(last), Some(first)) => format!("{} {}", last, first),
            _ => self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "jdoe@fleet.test".to_string(),
            password_hash: "x".to_string(),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            employee_id: None,
            is_staff: false,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_full_name_falls_back_to_email() {
        assert_eq!(user(Some("Jane"), Some("Doe")).full_name(), "Doe Jane");
        assert_eq!(user(None, Some("Doe")).full_name(), "jdoe@fleet.test");
    }
}
