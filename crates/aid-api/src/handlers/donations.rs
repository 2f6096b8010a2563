//! Monetary donation handlers

use axum::extract::State;
use aid_service::dto::{
    CreateDonationRequest, DonationQuery, DonationResponse, DonationStatsResponse, StatsQuery,
    UpdateDonationRequest,
};
use aid_service::DonationService;

use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::response::{ApiJson, ApiMessage, ApiResult, Created};
use crate::state::AppState;

/// GET /donations
pub async fn list_donations(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DonationQuery>,
) -> ApiResult<ApiJson<Vec<DonationResponse>>> {
    let service = DonationService::new(state.service_context());
    Ok(ApiJson(service.list(query).await?))
}

/// GET /donations/stats
pub async fn donation_stats(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<StatsQuery>,
) -> ApiResult<ApiJson<DonationStatsResponse>> {
    let service = DonationService::new(state.service_context());
    Ok(ApiJson(service.stats(query).await?))
}

/// GET /donations/:id
pub async fn get_donation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiJson<DonationResponse>> {
    let service = DonationService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// GET /donations/donor/:donor_id
pub async fn donations_by_donor(
    State(state): State<AppState>,
    ApiPath(donor_id): ApiPath<i64>,
) -> ApiResult<ApiJson<Vec<DonationResponse>>> {
    let service = DonationService::new(state.service_context());
    Ok(ApiJson(service.by_donor(donor_id).await?))
}

/// GET /donations/life-member/:member_id
pub async fn donations_by_life_member(
    State(state): State<AppState>,
    ApiPath(member_id): ApiPath<i64>,
) -> ApiResult<ApiJson<Vec<DonationResponse>>> {
    let service = DonationService::new(state.service_context());
    Ok(ApiJson(service.by_life_member(member_id).await?))
}

/// POST /donations
pub async fn create_donation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDonationRequest>,
) -> ApiResult<Created<ApiMessage<DonationResponse>>> {
    let service = DonationService::new(state.service_context());
    let donation = service.create(request).await?;
    Ok(Created(ApiMessage::with_data(
        "Donation created successfully",
        donation,
    )))
}

/// PUT /donations/:id
pub async fn update_donation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateDonationRequest>,
) -> ApiResult<ApiMessage<DonationResponse>> {
    let service = DonationService::new(state.service_context());
    let donation = service.update(id, request).await?;
    Ok(ApiMessage::with_data("Donation updated successfully", donation))
}

/// DELETE /donations/:id
pub async fn delete_donation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiMessage> {
    let service = DonationService::new(state.service_context());
    service.delete(id).await?;
    Ok(ApiMessage::new("Donation deleted successfully"))
}
