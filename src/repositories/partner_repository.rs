//! Partnership and partner persistence

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::partner::{Partner, Partnership, PartnershipStatus};
use crate::utils::errors::AppError;

pub struct PartnerRepository {
    pool: PgPool,
}

impl PartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_partnership(
        &self,
        name: &str,
        status: PartnershipStatus,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        description: Option<&str>,
        is_permanent: bool,
        created_by: Option<Uuid>,
    ) -> Result<Partnership, AppError> {
        let partnership = sqlx::query_as::<_, Partnership>(
            r#"
            INSERT INTO partnerships (id, name, status, start_date, end_date, description, is_permanent, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(status)
        .bind(start_date)
        .bind(end_date)
        .bind(description)
        .bind(is_permanent)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(partnership)
    }

    pub async fn find_partnership(&self, id: Uuid) -> Result<Option<Partnership>, AppError> {
        let partnership =
            sqlx::query_as::<_, Partnership>("SELECT * FROM partnerships WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(partnership)
    }

    pub async fn find_all_partnerships(&self) -> Result<Vec<Partnership>, AppError> {
        let partnerships =
            sqlx::query_as::<_, Partnership>("SELECT * FROM partnerships ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(partnerships)
    }

    pub async fn create_partner(
        &self,
        partnership_id: Uuid,
        email: &str,
        address: &str,
        website: Option<&str>,
        phone_number: &str,
        company_nif: Option<&str>,
        created_by: Option<Uuid>,
    ) -> Result<Partner, AppError> {
        let partner = sqlx::query_as::<_, Partner>(
            r#"
            INSERT INTO partners (id, partnership_id, email, address, website, phone_number, company_nif, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(partnership_id)
        .bind(email)
        .bind(address)
        .bind(website)
        .bind(phone_number)
        .bind(company_nif)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(partner)
    }

    pub async fn find_partner(&self, id: Uuid) -> Result<Option<Partner>, AppError> {
        let partner = sqlx::query_as::<_, Partner>("SELECT * FROM partners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(partner)
    }

    pub async fn find_all_partners(&self) -> Result<Vec<Partner>, AppError> {
        let partners =
            sqlx::query_as::<_, Partner>("SELECT * FROM partners ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(partners)
    }

    /// A partner may only act as a provider while its partnership is ACTIVE.
    pub async fn find_active_partner(&self, id: Uuid) -> Result<Option<Partner>, AppError> {
        let partner = sqlx::query_as::<_, Partner>(
            r#"
            SELECT p.* FROM partners p
            JOIN partnerships ps ON ps.id = p.partnership_id
            WHERE p.id = $1 AND ps.status = 'active'
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(partner)
    }
}
