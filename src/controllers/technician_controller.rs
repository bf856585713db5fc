//! Vehicle technician controller

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::technician_dto::{CreateTechnicianRequest, TechnicianResponse};
use crate::dto::user_dto::UserResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::dto::ApiResponse;
use crate::repositories::{
    technician_repository::TechnicianRepository, user_repository::UserRepository,
    vehicle_repository::VehicleRepository,
};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct TechnicianController {
    pool: PgPool,
    technicians: TechnicianRepository,
    users: UserRepository,
    vehicles: VehicleRepository,
}

impl TechnicianController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            technicians: TechnicianRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(
        &self,
        request: CreateTechnicianRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<TechnicianResponse>> {
        request.validate()?;

        if request.begin_date > request.end_date {
            return Err(AppError::Validation(
                "technician begin date must not be after its end date".to_string(),
            ));
        }

        let user = self
            .users
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| not_found_error("User", &request.user_id.to_string()))?;

        let vehicles = self.vehicles.find_by_ids(&request.managed_vehicles).await?;
        if vehicles.len() != request.managed_vehicles.len() {
            return Err(AppError::NotFound(
                "one or more managed vehicles do not exist".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let technician = TechnicianRepository::create_tx(
            &mut *tx,
            request.user_id,
            request.begin_date,
            request.end_date,
            created_by,
        )
        .await?;

        for vehicle_id in &request.managed_vehicles {
            TechnicianRepository::link_vehicle_tx(&mut *tx, technician.id, *vehicle_id).await?;
        }

        tx.commit().await?;

        Ok(ApiResponse::success_with_message(
            TechnicianResponse::from_parts(
                technician,
                UserResponse::from(user),
                vehicles.into_iter().map(VehicleResponse::from).collect(),
            ),
            "technician created".to_string(),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<TechnicianResponse>> {
        let technicians = self.technicians.find_all().await?;

        let mut responses = Vec::with_capacity(technicians.len());
        for technician in technicians {
            let user = self
                .users
                .find_by_id(technician.user_id)
                .await?
                .ok_or_else(|| not_found_error("User", &technician.user_id.to_string()))?;

            let vehicle_ids = self.technicians.managed_vehicle_ids(technician.id).await?;
            let vehicles = self.vehicles.find_by_ids(&vehicle_ids).await?;

            responses.push(TechnicianResponse::from_parts(
                technician,
                UserResponse::from(user),
                vehicles.into_iter().map(VehicleResponse::from).collect(),
            ));
        }

        Ok(responses)
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.technicians.count().await
    }
}
