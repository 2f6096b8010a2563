//! Authentication handlers

use axum::extract::State;
use aid_service::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use aid_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiMessage, ApiResult, Created};
use crate::state::AppState;

/// Register an operator account
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<ApiMessage<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(ApiMessage::with_data(
        "User registered successfully",
        response,
    )))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<ApiMessage<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(ApiMessage::with_data("Login successful", response))
}

/// Account behind the bearer token
///
/// GET /auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<ApiJson<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let user = service.me(auth.user_id).await?;
    Ok(ApiJson(user))
}
