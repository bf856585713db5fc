//! Fuel catalog and fuel consumption persistence

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::fuel::{Fuel, FuelConsumption, QuantityUnit};
use crate::models::maintenance::PaymentMethod;
use crate::utils::errors::AppError;

pub struct FuelRepository {
    pool: PgPool,
}

#[allow(clippy::too_many_arguments)]
impl FuelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_fuel(&self, fuel_type: &str) -> Result<Fuel, AppError> {
        let fuel = sqlx::query_as::<_, Fuel>(
            "INSERT INTO fuels (id, fuel_type) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(fuel_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(fuel)
    }

    pub async fn find_fuel(&self, id: Uuid) -> Result<Option<Fuel>, AppError> {
        let fuel = sqlx::query_as::<_, Fuel>("SELECT * FROM fuels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(fuel)
    }

    pub async fn find_all_fuels(&self) -> Result<Vec<Fuel>, AppError> {
        let fuels = sqlx::query_as::<_, Fuel>("SELECT * FROM fuels ORDER BY fuel_type")
            .fetch_all(&self.pool)
            .await?;

        Ok(fuels)
    }

    pub async fn create_consumption_tx(
        conn: &mut PgConnection,
        vehicle_id: Uuid,
        fuel_id: Uuid,
        partner_id: Uuid,
        quantity_unit: QuantityUnit,
        quantity: Option<Decimal>,
        payment_date: Option<NaiveDate>,
        payment_amount: Option<Decimal>,
        payment_method: PaymentMethod,
        created_by: Option<Uuid>,
    ) -> Result<FuelConsumption, AppError> {
        let consumption = sqlx::query_as::<_, FuelConsumption>(
            r#"
            INSERT INTO fuel_consumptions
                (id, vehicle_id, fuel_id, partner_id, quantity_unit, quantity,
                 payment_date, payment_amount, payment_method, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(fuel_id)
        .bind(partner_id)
        .bind(quantity_unit)
        .bind(quantity)
        .bind(payment_date)
        .bind(payment_amount)
        .bind(payment_method)
        .bind(created_by)
        .fetch_one(conn)
        .await?;

        Ok(consumption)
    }

    pub async fn update_consumption_tx(
        conn: &mut PgConnection,
        id: Uuid,
        quantity_unit: Option<QuantityUnit>,
        quantity: Option<Decimal>,
        payment_date: Option<NaiveDate>,
        payment_amount: Option<Decimal>,
        payment_method: Option<PaymentMethod>,
    ) -> Result<Option<FuelConsumption>, AppError> {
        let consumption = sqlx::query_as::<_, FuelConsumption>(
            r#"
            UPDATE fuel_consumptions SET
                quantity_unit  = COALESCE($2, quantity_unit),
                quantity       = COALESCE($3, quantity),
                payment_date   = COALESCE($4, payment_date),
                payment_amount = COALESCE($5, payment_amount),
                payment_method = COALESCE($6, payment_method),
                updated_at     = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(quantity_unit)
        .bind(quantity)
        .bind(payment_date)
        .bind(payment_amount)
        .bind(payment_method)
        .fetch_optional(conn)
        .await?;

        Ok(consumption)
    }

    pub async fn find_consumption(&self, id: Uuid) -> Result<Option<FuelConsumption>, AppError> {
        let consumption =
            sqlx::query_as::<_, FuelConsumption>("SELECT * FROM fuel_consumptions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(consumption)
    }

    pub async fn find_all_consumptions(&self) -> Result<Vec<FuelConsumption>, AppError> {
        let consumptions = sqlx::query_as::<_, FuelConsumption>(
            "SELECT * FROM fuel_consumptions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(consumptions)
    }

    pub async fn find_consumptions_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<FuelConsumption>, AppError> {
        let consumptions = sqlx::query_as::<_, FuelConsumption>(
            "SELECT * FROM fuel_consumptions WHERE vehicle_id = $1 ORDER BY created_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(consumptions)
    }
}
