//! Document and document cost persistence

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::document::{Document, DocumentCategory, DocumentCost, DocumentKind, DocumentOwner};
use crate::models::maintenance::PaymentMethod;
use crate::utils::errors::AppError;

pub struct DocumentRepository {
    pool: PgPool,
}

#[allow(clippy::too_many_arguments)]
impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        document_type: DocumentKind,
        document_category: DocumentCategory,
        issued_to: DocumentOwner,
        vehicle_id: Option<Uuid>,
        driver_id: Option<Uuid>,
        is_renewable: bool,
        validity_period: Option<i32>,
        renewal_frequency: Option<i32>,
        issuing_authority_id: Option<Uuid>,
        exp_begin_date: Option<NaiveDate>,
        exp_end_date: Option<NaiveDate>,
        description: Option<&str>,
        image_path: Option<&str>,
        created_by: Option<Uuid>,
    ) -> Result<Document, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents
                (id, name, document_type, document_category, issued_to, vehicle_id, driver_id,
                 is_renewable, validity_period, renewal_frequency, issuing_authority_id,
                 exp_begin_date, exp_end_date, description, image_path, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(document_type)
        .bind(document_category)
        .bind(issued_to)
        .bind(vehicle_id)
        .bind(driver_id)
        .bind(is_renewable)
        .bind(validity_period)
        .bind(renewal_frequency)
        .bind(issuing_authority_id)
        .bind(exp_begin_date)
        .bind(exp_end_date)
        .bind(description)
        .bind(image_path)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(document)
    }

    pub async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        let documents =
            sqlx::query_as::<_, Document>("SELECT * FROM documents ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(documents)
    }

    pub async fn find_for_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Document>, AppError> {
        let documents = sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE vehicle_id = $1 ORDER BY created_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    pub async fn create_cost_tx(
        conn: &mut PgConnection,
        document_id: Uuid,
        payment_date: Option<NaiveDate>,
        payment_amount: Option<Decimal>,
        payment_method: PaymentMethod,
        notes: Option<&str>,
        created_by: Option<Uuid>,
    ) -> Result<DocumentCost, AppError> {
        let cost = sqlx::query_as::<_, DocumentCost>(
            r#"
            INSERT INTO document_costs
                (id, document_id, payment_date, payment_amount, payment_method, notes, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(document_id)
        .bind(payment_date)
        .bind(payment_amount)
        .bind(payment_method)
        .bind(notes)
        .bind(created_by)
        .fetch_one(conn)
        .await?;

        Ok(cost)
    }

    pub async fn update_cost_tx(
        conn: &mut PgConnection,
        id: Uuid,
        payment_date: Option<NaiveDate>,
        payment_amount: Option<Decimal>,
        payment_method: Option<PaymentMethod>,
        notes: Option<&str>,
    ) -> Result<Option<DocumentCost>, AppError> {
        let cost = sqlx::query_as::<_, DocumentCost>(
            r#"
            UPDATE document_costs SET
                payment_date   = COALESCE($2, payment_date),
                payment_amount = COALESCE($3, payment_amount),
                payment_method = COALESCE($4, payment_method),
                notes          = COALESCE($5, notes),
                updated_at     = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payment_date)
        .bind(payment_amount)
        .bind(payment_method)
        .bind(notes)
        .fetch_optional(conn)
        .await?;

        Ok(cost)
    }

    pub async fn find_cost(&self, id: Uuid) -> Result<Option<DocumentCost>, AppError> {
        let cost = sqlx::query_as::<_, DocumentCost>("SELECT * FROM document_costs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cost)
    }

    pub async fn find_all_costs(&self) -> Result<Vec<DocumentCost>, AppError> {
        let costs = sqlx::query_as::<_, DocumentCost>(
            "SELECT * FROM document_costs ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(costs)
    }
}
