//! Vehicle technician model
//!
//! A user responsible for a set of vehicles over a date window. The
//! managed vehicles live in the `technician_vehicles` join table.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleTechnician {
    pub id: Uuid,
    pub user_id: Uuid,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
