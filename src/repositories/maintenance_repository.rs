//! Vehicle maintenance persistence
//!
//! `payment_amount` is always written by the cost service from the linked
//! issue costs; no method here accepts a client-supplied amount.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::maintenance::{MaintenanceStatus, PaymentMethod, VehicleMaintenance};
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: PgPool,
}

#[allow(clippy::too_many_arguments)]
impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_tx(
        conn: &mut PgConnection,
        name: Option<&str>,
        status: MaintenanceStatus,
        maintenance_begin_date: Option<NaiveDate>,
        maintenance_end_date: Option<NaiveDate>,
        payment_date: Option<NaiveDate>,
        payment_method: PaymentMethod,
        partner_id: Option<Uuid>,
        created_by: Option<Uuid>,
    ) -> Result<VehicleMaintenance, AppError> {
        let maintenance = sqlx::query_as::<_, VehicleMaintenance>(
            r#"
            INSERT INTO vehicle_maintenances
                (id, name, status, maintenance_begin_date, maintenance_end_date,
                 payment_date, payment_method, partner_id, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(status)
        .bind(maintenance_begin_date)
        .bind(maintenance_end_date)
        .bind(payment_date)
        .bind(payment_method)
        .bind(partner_id)
        .bind(created_by)
        .fetch_one(conn)
        .await?;

        Ok(maintenance)
    }

    pub async fn update_tx(
        conn: &mut PgConnection,
        id: Uuid,
        name: Option<&str>,
        status: MaintenanceStatus,
        maintenance_begin_date: Option<NaiveDate>,
        maintenance_end_date: Option<NaiveDate>,
        payment_date: Option<NaiveDate>,
        payment_method: PaymentMethod,
        partner_id: Option<Uuid>,
    ) -> Result<Option<VehicleMaintenance>, AppError> {
        let maintenance = sqlx::query_as::<_, VehicleMaintenance>(
            r#"
            UPDATE vehicle_maintenances SET
                name                   = $2,
                status                 = $3,
                maintenance_begin_date = $4,
                maintenance_end_date   = $5,
                payment_date           = $6,
                payment_method         = $7,
                partner_id             = $8,
                updated_at             = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(status)
        .bind(maintenance_begin_date)
        .bind(maintenance_end_date)
        .bind(payment_date)
        .bind(payment_method)
        .bind(partner_id)
        .fetch_optional(conn)
        .await?;

        Ok(maintenance)
    }

    /// Writes the derived amount and status after a recompute.
    pub async fn apply_derived_tx(
        conn: &mut PgConnection,
        id: Uuid,
        payment_amount: Decimal,
        status: MaintenanceStatus,
    ) -> Result<VehicleMaintenance, AppError> {
        let maintenance = sqlx::query_as::<_, VehicleMaintenance>(
            r#"
            UPDATE vehicle_maintenances
            SET payment_amount = $2, status = $3, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payment_amount)
        .bind(status)
        .fetch_one(conn)
        .await?;

        Ok(maintenance)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VehicleMaintenance>, AppError> {
        let maintenance = sqlx::query_as::<_, VehicleMaintenance>(
            "SELECT * FROM vehicle_maintenances WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maintenance)
    }

    pub async fn find_by_id_tx(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<VehicleMaintenance>, AppError> {
        let maintenance = sqlx::query_as::<_, VehicleMaintenance>(
            "SELECT * FROM vehicle_maintenances WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(maintenance)
    }

    pub async fn find_all(&self) -> Result<Vec<VehicleMaintenance>, AppError> {
        let maintenances = sqlx::query_as::<_, VehicleMaintenance>(
            "SELECT * FROM vehicle_maintenances ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(maintenances)
    }

    /// Maintenances touching a vehicle, reached through the linked issues.
    pub async fn find_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<VehicleMaintenance>, AppError> {
        let maintenances = sqlx::query_as::<_, VehicleMaintenance>(
            r#"
            SELECT DISTINCT vm.* FROM vehicle_maintenances vm
            JOIN maintenance_issue_reports mir ON mir.maintenance_id = vm.id
            JOIN issue_reports ir ON ir.id = mir.issue_report_id
            WHERE ir.vehicle_id = $1
            ORDER BY vm.created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(maintenances)
    }

    pub async fn link_issue_tx(
        conn: &mut PgConnection,
        maintenance_id: Uuid,
        issue_report_id: Uuid,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO maintenance_issue_reports (maintenance_id, issue_report_id)
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(maintenance_id)
        .bind(issue_report_id)
        .execute(conn)
        .await?;

        Ok(())
    }

    pub async fn clear_issues_tx(
        conn: &mut PgConnection,
        maintenance_id: Uuid,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM maintenance_issue_reports WHERE maintenance_id = $1")
            .bind(maintenance_id)
            .execute(conn)
            .await?;

        Ok(())
    }

    pub async fn issue_ids(&self, maintenance_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT issue_report_id FROM maintenance_issue_reports WHERE maintenance_id = $1",
        )
        .bind(maintenance_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Sum of linked issue costs; NULL costs count as zero.
    pub async fn sum_issue_costs_tx(
        conn: &mut PgConnection,
        maintenance_id: Uuid,
    ) -> Result<Decimal, AppError> {
        let total: Decimal = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(ir.issue_cost), 0)
            FROM maintenance_issue_reports mir
            JOIN issue_reports ir ON ir.id = mir.issue_report_id
            WHERE mir.maintenance_id = $1
            "#,
        )
        .bind(maintenance_id)
        .fetch_one(conn)
        .await?;

        Ok(total)
    }

    /// Maintenances whose derived amount depends on the given issue and may
    /// still change: an end date is set and the status is not terminal.
    pub async fn recompute_targets_tx(
        conn: &mut PgConnection,
        issue_report_id: Uuid,
    ) -> Result<Vec<VehicleMaintenance>, AppError> {
        let maintenances = sqlx::query_as::<_, VehicleMaintenance>(
            r#"
            SELECT vm.* FROM vehicle_maintenances vm
            JOIN maintenance_issue_reports mir ON mir.maintenance_id = vm.id
            WHERE mir.issue_report_id = $1
              AND vm.maintenance_end_date IS NOT NULL
              AND vm.status NOT IN ('rejected', 'canceled')
            FOR UPDATE OF vm
            "#,
        )
        .bind(issue_report_id)
        .fetch_all(conn)
        .await?;

        Ok(maintenances)
    }

    pub async fn count_pending(&self) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM vehicle_maintenances WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
