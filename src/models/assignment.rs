//! Vehicle-driver assignment model
//!
//! Links one driver to one vehicle for a date window. At most one ACTIVE
//! assignment may exist per vehicle; the partial unique index
//! `uq_active_vehicle_assignment` enforces that at the storage layer.
//! Rows are never deleted, only deactivated.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Assignment lifecycle state - maps to the ENUM assignment_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "assignment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleDriverAssignment {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
    pub assignment_status: AssignmentStatus,
    pub begin_at: NaiveDate,
    pub ends_at: NaiveDate,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
