//! Donor lookups

use axum::extract::State;
use aid_service::dto::{DonorQuery, DonorResponse};
use aid_service::DonorService;

use crate::extractors::{ApiPath, ApiQuery};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// GET /donors
pub async fn list_donors(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DonorQuery>,
) -> ApiResult<ApiJson<Vec<DonorResponse>>> {
    let service = DonorService::new(state.service_context());
    Ok(ApiJson(service.list(query).await?))
}

/// GET /donors/:id
pub async fn get_donor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiJson<DonorResponse>> {
    let service = DonorService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}
