//! Fuel catalog and fuel consumption controller

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::fuel_dto::{
    CreateFuelConsumptionRequest, CreateFuelRequest, FuelConsumptionResponse, FuelResponse,
    UpdateFuelConsumptionRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::fuel_repository::FuelRepository;
use crate::services::cost_service::CostService;
use crate::utils::errors::AppResult;

pub struct FuelController {
    fuels: FuelRepository,
    cost_service: CostService,
}

impl FuelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            fuels: FuelRepository::new(pool.clone()),
            cost_service: CostService::new(pool),
        }
    }

    pub async fn create_fuel(
        &self,
        request: CreateFuelRequest,
    ) -> AppResult<ApiResponse<FuelResponse>> {
        request.validate()?;

        let fuel = self.fuels.create_fuel(&request.fuel_type).await?;

        Ok(ApiResponse::success_with_message(
            FuelResponse::from(fuel),
            "fuel created".to_string(),
        ))
    }

    pub async fn list_fuels(&self) -> AppResult<Vec<FuelResponse>> {
        let fuels = self.fuels.find_all_fuels().await?;
        Ok(fuels.into_iter().map(FuelResponse::from).collect())
    }

    pub async fn record_consumption(
        &self,
        request: CreateFuelConsumptionRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<FuelConsumptionResponse>> {
        let consumption = self
            .cost_service
            .record_fuel_consumption(request, created_by)
            .await?;

        Ok(ApiResponse::success_with_message(
            FuelConsumptionResponse::from(consumption),
            "fuel consumption recorded".to_string(),
        ))
    }

    pub async fn update_consumption(
        &self,
        id: Uuid,
        request: UpdateFuelConsumptionRequest,
    ) -> AppResult<ApiResponse<FuelConsumptionResponse>> {
        let consumption = self.cost_service.update_fuel_consumption(id, request).await?;

        Ok(ApiResponse::success_with_message(
            FuelConsumptionResponse::from(consumption),
            "fuel consumption updated".to_string(),
        ))
    }

    pub async fn list_consumptions(&self) -> AppResult<Vec<FuelConsumptionResponse>> {
        let consumptions = self.fuels.find_all_consumptions().await?;
        Ok(consumptions.into_iter().map(FuelConsumptionResponse::from).collect())
    }
}
