//! Document and document cost controller

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::document_dto::{
    CreateDocumentCostRequest, CreateDocumentRequest, DocumentCostResponse, DocumentResponse,
    UpdateDocumentCostRequest,
};
use crate::dto::ApiResponse;
use crate::models::document::{DocumentCategory, DocumentOwner};
use crate::repositories::{
    document_repository::DocumentRepository, driver_repository::DriverRepository,
    partner_repository::PartnerRepository, vehicle_repository::VehicleRepository,
};
use crate::services::cost_service::CostService;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct DocumentController {
    documents: DocumentRepository,
    drivers: DriverRepository,
    vehicles: VehicleRepository,
    partners: PartnerRepository,
    cost_service: CostService,
}

impl DocumentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            documents: DocumentRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            partners: PartnerRepository::new(pool.clone()),
            cost_service: CostService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDocumentRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<DocumentResponse>> {
        request.validate()?;

        // The document belongs to exactly one owner kind.
        match request.issued_to {
            DocumentOwner::Vehicle => {
                if request.vehicle_id.is_none() || request.driver_id.is_some() {
                    return Err(AppError::Validation(
                        "a vehicle document requires a vehicle and no driver".to_string(),
                    ));
                }
            }
            DocumentOwner::Driver => {
                if request.driver_id.is_none() || request.vehicle_id.is_some() {
                    return Err(AppError::Validation(
                        "a driver document requires a driver and no vehicle".to_string(),
                    ));
                }
            }
        }

        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicles
                .find_by_id(vehicle_id)
                .await?
                .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;
        }
        if let Some(driver_id) = request.driver_id {
            self.drivers
                .find_by_id(driver_id)
                .await?
                .ok_or_else(|| not_found_error("Driver", &driver_id.to_string()))?;
        }

        if request.is_renewable {
            let (Some(begin), Some(end)) = (request.exp_begin_date, request.exp_end_date) else {
                return Err(AppError::Validation(
                    "a renewable document requires an expiration window".to_string(),
                ));
            };
            if begin > end {
                return Err(AppError::Validation(
                    "expiration window begin date must not be after its end date".to_string(),
                ));
            }
        }

        if let Some(authority_id) = request.issuing_authority_id {
            self.partners
                .find_active_partner(authority_id)
                .await?
                .ok_or_else(|| {
                    AppError::InvalidState(
                        "issuing authority must belong to an active partnership".to_string(),
                    )
                })?;
        }

        let document = self
            .documents
            .create(
                &request.name,
                request.document_type,
                request.document_category.unwrap_or(DocumentCategory::Core),
                request.issued_to,
                request.vehicle_id,
                request.driver_id,
                request.is_renewable,
                request.validity_period,
                request.renewal_frequency,
                request.issuing_authority_id,
                request.exp_begin_date,
                request.exp_end_date,
                request.description.as_deref(),
                request.image_path.as_deref(),
                created_by,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DocumentResponse::from(document),
            "document created".to_string(),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<DocumentResponse>> {
        let documents = self.documents.find_all().await?;
        Ok(documents.into_iter().map(DocumentResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<DocumentResponse> {
        let document = self
            .documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Document", &id.to_string()))?;

        Ok(DocumentResponse::from(document))
    }

    pub async fn record_cost(
        &self,
        request: CreateDocumentCostRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<DocumentCostResponse>> {
        let cost = self.cost_service.record_document_cost(request, created_by).await?;

        Ok(ApiResponse::success_with_message(
            DocumentCostResponse::from(cost),
            "document cost recorded".to_string(),
        ))
    }

    pub async fn update_cost(
        &self,
        id: Uuid,
        request: UpdateDocumentCostRequest,
    ) -> AppResult<ApiResponse<DocumentCostResponse>> {
        let cost = self.cost_service.update_document_cost(id, request).await?;

        Ok(ApiResponse::success_with_message(
            DocumentCostResponse::from(cost),
            "document cost updated".to_string(),
        ))
    }

    pub async fn list_costs(&self) -> AppResult<Vec<DocumentCostResponse>> {
        let costs = self.documents.find_all_costs().await?;
        Ok(costs.into_iter().map(DocumentCostResponse::from).collect())
    }
}
