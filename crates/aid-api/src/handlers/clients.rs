//! Client (aid recipient) handlers

use axum::extract::State;
use aid_service::dto::{ClientQuery, ClientResponse, CreateClientRequest, UpdateClientRequest};
use aid_service::ClientService;

use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::response::{ApiJson, ApiMessage, ApiResult, Created};
use crate::state::AppState;

/// GET /clients
pub async fn list_clients(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ClientQuery>,
) -> ApiResult<ApiJson<Vec<ClientResponse>>> {
    let service = ClientService::new(state.service_context());
    Ok(ApiJson(service.list(query).await?))
}

/// GET /clients/:id
pub async fn get_client(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiJson<ClientResponse>> {
    let service = ClientService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /clients
pub async fn create_client(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateClientRequest>,
) -> ApiResult<Created<ApiMessage<ClientResponse>>> {
    let service = ClientService::new(state.service_context());
    let client = service.create(request).await?;
    Ok(Created(ApiMessage::with_data(
        "Client created successfully",
        client,
    )))
}

/// PUT /clients/:id
pub async fn update_client(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateClientRequest>,
) -> ApiResult<ApiMessage<ClientResponse>> {
    let service = ClientService::new(state.service_context());
    let client = service.update(id, request).await?;
    Ok(ApiMessage::with_data("Client updated successfully", client))
}

/// PATCH /clients/:id/deactivate
pub async fn deactivate_client(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiMessage> {
    let service = ClientService::new(state.service_context());
    service.deactivate(id).await?;
    Ok(ApiMessage::new("Client deactivated successfully"))
}

/// DELETE /clients/:id
pub async fn delete_client(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<ApiMessage> {
    let service = ClientService::new(state.service_context());
    service.delete(id).await?;
    Ok(ApiMessage::new("Client deleted successfully"))
}
