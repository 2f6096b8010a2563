//! Life member handlers
//!
//! A member is written together with its donor row; see `MemberService`.

use axum::extract::State;
use aid_service::dto::{
    CreateMemberRequest, MemberCreatedResponse, MemberQuery, MemberResponse, UpdateMemberRequest,
};
use aid_service::MemberService;

use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::response::{ApiJson, ApiMessage, ApiResult, Created};
use crate::state::AppState;

/// GET /members
pub async fn list_members(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MemberQuery>,
) -> ApiResult<ApiJson<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    Ok(ApiJson(service.list(query).await?))
}

/// GET /members/:id
pub async fn get_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiJson<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /members
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> ApiResult<Created<ApiMessage<MemberCreatedResponse>>> {
    let service = MemberService::new(state.service_context());
    let created = service.create(request).await?;
    Ok(Created(ApiMessage::with_data(
        "Member created successfully",
        created,
    )))
}

/// PUT /members/:id
pub async fn update_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateMemberRequest>,
) -> ApiResult<ApiMessage<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.update(id, request).await?;
    Ok(ApiMessage::with_data("Member updated successfully", member))
}

/// PATCH /members/:id/deactivate
pub async fn deactivate_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiMessage> {
    let service = MemberService::new(state.service_context());
    service.deactivate(id).await?;
    Ok(ApiMessage::new("Member deactivated successfully"))
}

/// DELETE /members/:id
pub async fn delete_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiMessage> {
    let service = MemberService::new(state.service_context());
    service.delete(id).await?;
    Ok(ApiMessage::new("Member deleted successfully"))
}
