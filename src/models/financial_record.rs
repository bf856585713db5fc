//! Financial record (ledger) model
//!
//! Append-only mirror of exactly one cost-bearing source record. The
//! schema enforces one-source-per-row; the per-source UNIQUE constraints
//! make the mirroring upsert idempotent.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::maintenance::PaymentMethod;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FinancialRecord {
    pub id: Uuid,
    pub document_cost_id: Option<Uuid>,
    pub maintenance_id: Option<Uuid>,
    pub fuel_consumption_id: Option<Uuid>,
    pub cost: Option<Decimal>,
    pub payment_method: PaymentMethod,
    pub record_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The cost-bearing record a ledger entry mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerSource {
    DocumentCost(Uuid),
    FuelConsumption(Uuid),
    Maintenance(Uuid),
}

impl FinancialRecord {
    /// Exactly one of the three source links must be set.
    pub fn has_single_source(&self) -> bool {
        [self.document_cost_id, self.maintenance_id, self.fuel_consumption_id]
            .iter()
            .filter(|s| s.is_some())
            .count()
            == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        document_cost_id: Option<Uuid>,
        maintenance_id: Option<Uuid>,
        fuel_consumption_id: Option<Uuid>,
    ) -> FinancialRecord {
        FinancialRecord {
            id: Uuid::new_v4(),
            document_cost_id,
            maintenance_id,
            fuel_consumption_id,
            cost: None,
            payment_method: PaymentMethod::Cash,
            record_date: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_single_source_check() {
        let id = Uuid::new_v4();
        assert!(record(Some(id), None, None).has_single_source());
        assert!(record(None, Some(id), None).has_single_source());
        assert!(record(None, None, Some(id)).has_single_source());
        assert!(!record(None, None, None).has_single_source());
        assert!(!record(Some(id), Some(id), None).has_single_source());
    }
}
