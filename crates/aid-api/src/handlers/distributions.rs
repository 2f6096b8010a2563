//! Distribution handlers

use axum::extract::State;
use aid_service::dto::{
    CreateDistributionRequest, DistributionQuery, DistributionResponse,
    DistributionStatsResponse, StatusRequest, UpdateDistributionRequest,
};
use aid_service::DistributionService;

use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::response::{ApiJson, ApiMessage, ApiResult, Created};
use crate::state::AppState;

/// GET /distributions
pub async fn list_distributions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DistributionQuery>,
) -> ApiResult<ApiJson<Vec<DistributionResponse>>> {
    let service = DistributionService::new(state.service_context());
    Ok(ApiJson(service.list(query).await?))
}

/// GET /distributions/stats
pub async fn distribution_stats(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<DistributionStatsResponse>> {
    let service = DistributionService::new(state.service_context());
    Ok(ApiJson(service.stats().await?))
}

/// GET /distributions/client/:client_id
pub async fn distributions_by_client(
    State(state): State<AppState>,
    ApiPath(client_id): ApiPath<i64>,
) -> ApiResult<ApiJson<Vec<DistributionResponse>>> {
    let service = DistributionService::new(state.service_context());
    Ok(ApiJson(service.by_client(client_id).await?))
}

/// GET /distributions/:id
pub async fn get_distribution(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiJson<DistributionResponse>> {
    let service = DistributionService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /distributions
pub async fn create_distribution(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDistributionRequest>,
) -> ApiResult<Created<ApiMessage<DistributionResponse>>> {
    let service = DistributionService::new(state.service_context());
    let distribution = service.create(request).await?;
    Ok(Created(ApiMessage::with_data(
        "Distribution created successfully",
        distribution,
    )))
}

/// PUT /distributions/:id
pub async fn update_distribution(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateDistributionRequest>,
) -> ApiResult<ApiMessage<DistributionResponse>> {
    let service = DistributionService::new(state.service_context());
    let distribution = service.update(id, request).await?;
    Ok(ApiMessage::with_data(
        "Distribution updated successfully",
        distribution,
    ))
}

/// PATCH /distributions/:id/status
pub async fn update_distribution_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<StatusRequest>,
) -> ApiResult<ApiMessage<DistributionResponse>> {
    let service = DistributionService::new(state.service_context());
    let distribution = service.update_status(id, request).await?;
    Ok(ApiMessage::with_data("Status updated successfully", distribution))
}

/// DELETE /distributions/:id
pub async fn delete_distribution(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiMessage> {
    let service = DistributionService::new(state.service_context());
    service.delete(id).await?;
    Ok(ApiMessage::new("Distribution deleted successfully"))
}
