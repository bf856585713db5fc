//! Financial record (ledger) persistence
//!
//! One ledger row per source record. The per-source UNIQUE constraints are
//! the upsert keys, so re-saving a source updates its row in place.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::financial_record::{FinancialRecord, LedgerSource};
use crate::models::maintenance::PaymentMethod;
use crate::utils::errors::AppError;

pub struct FinancialRecordRepository {
    pool: PgPool,
}

/// Maps a ledger source to its FK column, the upsert key for that source.
fn source_column(source: LedgerSource) -> (&'static str, Uuid) {
    match source {
        LedgerSource::DocumentCost(id) => ("document_cost_id", id),
        LedgerSource::Maintenance(id) => ("maintenance_id", id),
        LedgerSource::FuelConsumption(id) => ("fuel_consumption_id", id),
    }
}

// The column name comes from `source_column` above, never from input.
fn upsert_statement(column: &str) -> String {
    format!(
        r#"
        INSERT INTO financial_records (id, {column}, cost, payment_method, record_date)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT ({column}) DO UPDATE
        SET cost = EXCLUDED.cost,
            payment_method = EXCLUDED.payment_method,
            record_date = EXCLUDED.record_date,
            updated_at = now()
        RETURNING *
        "#
    )
}

impl FinancialRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn upsert_tx(
        conn: &mut PgConnection,
        source: LedgerSource,
        cost: Option<Decimal>,
        payment_method: PaymentMethod,
        record_date: Option<NaiveDate>,
    ) -> Result<FinancialRecord, AppError> {
        let (column, source_id) = source_column(source);
        let sql = upsert_statement(column);

        let record = sqlx::query_as::<_, FinancialRecord>(&sql)
            .bind(Uuid::new_v4())
            .bind(source_id)
            .bind(cost)
            .bind(payment_method)
            .bind(record_date)
            .fetch_one(conn)
            .await?;

        Ok(record)
    }

    pub async fn find_all(&self) -> Result<Vec<FinancialRecord>, AppError> {
        let records = sqlx::query_as::<_, FinancialRecord>(
            "SELECT * FROM financial_records ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn total_cost(&self) -> Result<Decimal, AppError> {
        let total: Decimal =
            sqlx::query_scalar("SELECT COALESCE(SUM(cost), 0) FROM financial_records")
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_source_upserts_on_its_own_column() {
        let id = Uuid::new_v4();

        let (column, source_id) = source_column(LedgerSource::Maintenance(id));
        assert_eq!(column, "maintenance_id");
        assert_eq!(source_id, id);

        assert_eq!(source_column(LedgerSource::DocumentCost(id)).0, "document_cost_id");
        assert_eq!(
            source_column(LedgerSource::FuelConsumption(id)).0,
            "fuel_consumption_id"
        );
    }

    #[test]
    fn test_upsert_conflicts_on_the_source_key() {
        // Re-saving a source must update its row in place, so the conflict
        // target has to be the same column the row is inserted under.
        let sql = upsert_statement("maintenance_id");
        assert!(sql.contains("ON CONFLICT (maintenance_id) DO UPDATE"));
        assert!(sql.contains("(id, maintenance_id, cost, payment_method, record_date)"));
    }
}
