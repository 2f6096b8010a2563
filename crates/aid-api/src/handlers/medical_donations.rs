//! Medical donation handlers
//!
//! Literal segments (`/stats`, `/expiring`, `/expired`) are routed ahead of
//! `/:id` so they never parse as ids.

use axum::extract::State;
use aid_service::dto::{
    CreateMedicalDonationRequest, ExpiringQuery, MedicalDonationResponse,
    MedicalDonationStatsResponse, StatusRequest, UpdateMedicalDonationRequest,
};
use aid_service::MedicalDonationService;

use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::response::{ApiJson, ApiMessage, ApiResult, Created};
use crate::state::AppState;

/// GET /medical-donations
pub async fn list_medical_donations(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<MedicalDonationResponse>>> {
    let service = MedicalDonationService::new(state.service_context());
    Ok(ApiJson(service.list().await?))
}

/// GET /medical-donations/stats
pub async fn medical_donation_stats(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<MedicalDonationStatsResponse>> {
    let service = MedicalDonationService::new(state.service_context());
    Ok(ApiJson(service.stats().await?))
}

/// GET /medical-donations/expiring?days=30
pub async fn expiring_medical_donations(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ExpiringQuery>,
) -> ApiResult<ApiJson<Vec<MedicalDonationResponse>>> {
    let service = MedicalDonationService::new(state.service_context());
    Ok(ApiJson(service.expiring(query).await?))
}

/// GET /medical-donations/expired
pub async fn expired_medical_donations(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<MedicalDonationResponse>>> {
    let service = MedicalDonationService::new(state.service_context());
    Ok(ApiJson(service.expired().await?))
}

/// GET /medical-donations/status/:status
pub async fn medical_donations_by_status(
    State(state): State<AppState>,
    ApiPath(status): ApiPath<String>,
) -> ApiResult<ApiJson<Vec<MedicalDonationResponse>>> {
    let service = MedicalDonationService::new(state.service_context());
    Ok(ApiJson(service.by_status(&status).await?))
}

/// GET /medical-donations/donor/:donor_id
pub async fn medical_donations_by_donor(
    State(state): State<AppState>,
    ApiPath(donor_id): ApiPath<i64>,
) -> ApiResult<ApiJson<Vec<MedicalDonationResponse>>> {
    let service = MedicalDonationService::new(state.service_context());
    Ok(ApiJson(service.by_donor(donor_id).await?))
}

/// GET /medical-donations/:id
pub async fn get_medical_donation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiJson<MedicalDonationResponse>> {
    let service = MedicalDonationService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /medical-donations
pub async fn create_medical_donation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMedicalDonationRequest>,
) -> ApiResult<Created<ApiMessage<MedicalDonationResponse>>> {
    let service = MedicalDonationService::new(state.service_context());
    let donation = service.create(request).await?;
    Ok(Created(ApiMessage::with_data(
        "Medical donation created successfully",
        donation,
    )))
}

/// PUT /medical-donations/:id
pub async fn update_medical_donation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateMedicalDonationRequest>,
) -> ApiResult<ApiMessage<MedicalDonationResponse>> {
    let service = MedicalDonationService::new(state.service_context());
    let donation = service.update(id, request).await?;
    Ok(ApiMessage::with_data(
        "Medical donation updated successfully",
        donation,
    ))
}

/// PATCH /medical-donations/:id/status
pub async fn update_medical_donation_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<StatusRequest>,
) -> ApiResult<ApiMessage<MedicalDonationResponse>> {
    let service = MedicalDonationService::new(state.service_context());
    let donation = service.update_status(id, request).await?;
    Ok(ApiMessage::with_data("Status updated successfully", donation))
}

/// DELETE /medical-donations/:id
pub async fn delete_medical_donation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiMessage> {
    let service = MedicalDonationService::new(state.service_context());
    service.delete(id).await?;
    Ok(ApiMessage::new("Medical donation deleted successfully"))
}
