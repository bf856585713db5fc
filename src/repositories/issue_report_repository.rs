//! Issue report persistence

use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::issue_report::{IssuePriority, IssueReport};
use crate::utils::errors::AppError;

pub struct IssueReportRepository {
    pool: PgPool,
}

impl IssueReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        vehicle_id: Uuid,
        priority: IssuePriority,
        description: &str,
        created_by: Option<Uuid>,
    ) -> Result<IssueReport, AppError> {
        let report = sqlx::query_as::<_, IssueReport>(
            r#"
            INSERT INTO issue_reports (id, name, vehicle_id, priority, description, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(vehicle_id)
        .bind(priority)
        .bind(description)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(report)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<IssueReport>, AppError> {
        let report = sqlx::query_as::<_, IssueReport>("SELECT * FROM issue_reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(report)
    }

    pub async fn find_by_id_tx(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<IssueReport>, AppError> {
        let report = sqlx::query_as::<_, IssueReport>(
            "SELECT * FROM issue_reports WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(report)
    }

    pub async fn find_all(&self) -> Result<Vec<IssueReport>, AppError> {
        let reports =
            sqlx::query_as::<_, IssueReport>("SELECT * FROM issue_reports ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(reports)
    }

    pub async fn find_for_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<IssueReport>, AppError> {
        let reports = sqlx::query_as::<_, IssueReport>(
            "SELECT * FROM issue_reports WHERE vehicle_id = $1 ORDER BY created_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    /// Unfixed reports that can still be attached to a maintenance: either
    /// never linked, or only linked to maintenances that were rejected.
    pub async fn find_reviewable(&self) -> Result<Vec<IssueReport>, AppError> {
        let reports = sqlx::query_as::<_, IssueReport>(
            r#"
            SELECT ir.* FROM issue_reports ir
            WHERE ir.is_fixed = FALSE
              AND NOT EXISTS (
                  SELECT 1 FROM maintenance_issue_reports mir
                  JOIN vehicle_maintenances vm ON vm.id = mir.maintenance_id
                  WHERE mir.issue_report_id = ir.id AND vm.status <> 'rejected'
              )
            ORDER BY ir.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn set_cost_tx(
        conn: &mut PgConnection,
        id: Uuid,
        issue_cost: Decimal,
    ) -> Result<Option<IssueReport>, AppError> {
        let report = sqlx::query_as::<_, IssueReport>(
            "UPDATE issue_reports SET issue_cost = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(issue_cost)
        .fetch_optional(conn)
        .await?;

        Ok(report)
    }

    pub async fn count_unresolved(&self) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM issue_reports WHERE is_fixed = FALSE")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
