//! Partnership and partner controller

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::partner_dto::{
    CreatePartnerRequest, CreatePartnershipRequest, PartnerResponse, PartnershipResponse,
};
use crate::dto::ApiResponse;
use crate::models::partner::PartnershipStatus;
use crate::repositories::partner_repository::PartnerRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct PartnerController {
    repository: PartnerRepository,
}

impl PartnerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PartnerRepository::new(pool),
        }
    }

    pub async fn create_partnership(
        &self,
        request: CreatePartnershipRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<PartnershipResponse>> {
        request.validate()?;

        if let Some(end) = request.end_date {
            if request.start_date > end {
                return Err(AppError::Validation(
                    "partnership start date must not be after its end date".to_string(),
                ));
            }
        }

        if !request.is_permanent && request.end_date.is_none() {
            return Err(AppError::Validation(
                "a non-permanent partnership requires an end date".to_string(),
            ));
        }

        let partnership = self
            .repository
            .create_partnership(
                &request.name,
                request.status.unwrap_or(PartnershipStatus::Active),
                request.start_date,
                request.end_date,
                request.description.as_deref(),
                request.is_permanent,
                created_by,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            PartnershipResponse::from(partnership),
            "partnership created".to_string(),
        ))
    }

    pub async fn list_partnerships(&self) -> AppResult<Vec<PartnershipResponse>> {
        let partnerships = self.repository.find_all_partnerships().await?;
        Ok(partnerships.into_iter().map(PartnershipResponse::from).collect())
    }

    pub async fn create_partner(
        &self,
        request: CreatePartnerRequest,
        created_by: Option<Uuid>,
    ) -> AppResult<ApiResponse<PartnerResponse>> {
        request.validate()?;

        let partnership = self
            .repository
            .find_partnership(request.partnership_id)
            .await?
            .ok_or_else(|| not_found_error("Partnership", &request.partnership_id.to_string()))?;

        if partnership.status != PartnershipStatus::Active {
            return Err(AppError::InvalidState(
                "partners can only be added to an active partnership".to_string(),
            ));
        }

        let partner = self
            .repository
            .create_partner(
                request.partnership_id,
                &request.email,
                &request.address,
                request.website.as_deref(),
                &request.phone_number,
                request.company_nif.as_deref(),
                created_by,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            PartnerResponse::from(partner),
            "partner created".to_string(),
        ))
    }

    pub async fn list_partners(&self) -> AppResult<Vec<PartnerResponse>> {
        let partners = self.repository.find_all_partners().await?;
        Ok(partners.into_iter().map(PartnerResponse::from).collect())
    }
}
