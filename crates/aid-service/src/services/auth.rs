//! Authentication service
//!
//! Handles operator registration, login and the current-user lookup.

use aid_common::auth::validate_password_strength;
use aid_common::AppError;
use aid_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new operator and sign them in
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(request.name.trim(), request.email.trim(), &password_hash)
            .await?;

        info!(user_id = user.id, "User registered successfully");

        self.issue(UserResponse::from(user))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(request.email.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                AppError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                AppError::InvalidCredentials
            })?;

        if let Err(e) = self
            .ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
        {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(e.into());
        }

        info!(user_id = user.id, "User logged in successfully");

        self.issue(UserResponse::from(user))
    }

    /// Look up the operator behind a verified token
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserResponse::from(user))
    }

    fn issue(&self, user: UserResponse) -> ServiceResult<AuthResponse> {
        let token = self
            .ctx
            .jwt_service()
            .issue(user.id, &user.email)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse {
            token: token.token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user,
        })
    }
}
