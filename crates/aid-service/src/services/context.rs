//! Service context - dependency container for services
//!
//! Holds the pool, the repositories and the auth helpers every service needs.

use std::sync::Arc;

use aid_common::auth::{JwtService, PasswordService};
use aid_core::traits::{
    ClientRepository, DistributionRepository, DonationRepository, DonorRepository,
    MedicalDonationRepository, MemberRepository, UserRepository,
};
use aid_db::{
    PgClientRepository, PgDistributionRepository, PgDonationRepository, PgDonorRepository,
    PgMedicalDonationRepository, PgMemberRepository, PgPool, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap: repositories and the JWT service sit behind `Arc`s and
/// the pool is itself a handle.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    donor_repo: Arc<dyn DonorRepository>,
    member_repo: Arc<dyn MemberRepository>,
    client_repo: Arc<dyn ClientRepository>,
    donation_repo: Arc<dyn DonationRepository>,
    medical_donation_repo: Arc<dyn MedicalDonationRepository>,
    distribution_repo: Arc<dyn DistributionRepository>,

    // Auth
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
}

impl ServiceContext {
    /// Wire every repository to the PostgreSQL implementation over `pool`
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            donor_repo: Arc::new(PgDonorRepository::new(pool.clone())),
            member_repo: Arc::new(PgMemberRepository::new(pool.clone())),
            client_repo: Arc::new(PgClientRepository::new(pool.clone())),
            donation_repo: Arc::new(PgDonationRepository::new(pool.clone())),
            medical_donation_repo: Arc::new(PgMedicalDonationRepository::new(pool.clone())),
            distribution_repo: Arc::new(PgDistributionRepository::new(pool.clone())),
            pool,
            jwt_service,
            password_service: PasswordService::new(),
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn donor_repo(&self) -> &dyn DonorRepository {
        self.donor_repo.as_ref()
    }

    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    pub fn client_repo(&self) -> &dyn ClientRepository {
        self.client_repo.as_ref()
    }

    pub fn donation_repo(&self) -> &dyn DonationRepository {
        self.donation_repo.as_ref()
    }

    pub fn medical_donation_repo(&self) -> &dyn MedicalDonationRepository {
        self.medical_donation_repo.as_ref()
    }

    pub fn distribution_repo(&self) -> &dyn DistributionRepository {
        self.distribution_repo.as_ref()
    }

    // === Auth ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for a context with substituted repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    donor_repo: Option<Arc<dyn DonorRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    client_repo: Option<Arc<dyn ClientRepository>>,
    donation_repo: Option<Arc<dyn DonationRepository>>,
    medical_donation_repo: Option<Arc<dyn MedicalDonationRepository>>,
    distribution_repo: Option<Arc<dyn DistributionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn donor_repo(mut self, repo: Arc<dyn DonorRepository>) -> Self {
        self.donor_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn client_repo(mut self, repo: Arc<dyn ClientRepository>) -> Self {
        self.client_repo = Some(repo);
        self
    }

    pub fn donation_repo(mut self, repo: Arc<dyn DonationRepository>) -> Self {
        self.donation_repo = Some(repo);
        self
    }

    pub fn medical_donation_repo(mut self, repo: Arc<dyn MedicalDonationRepository>) -> Self {
        self.medical_donation_repo = Some(repo);
        self
    }

    pub fn distribution_repo(mut self, repo: Arc<dyn DistributionRepository>) -> Self {
        self.distribution_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// Repositories not supplied fall back to the PostgreSQL implementation
    /// over the given pool.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the pool or JWT service is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::validation("pool is required"))?;
        let jwt_service = self
            .jwt_service
            .ok_or_else(|| ServiceError::validation("jwt_service is required"))?;

        let mut ctx = ServiceContext::postgres(pool, jwt_service);
        if let Some(repo) = self.user_repo {
            ctx.user_repo = repo;
        }
        if let Some(repo) = self.donor_repo {
            ctx.donor_repo = repo;
        }
        if let Some(repo) = self.member_repo {
            ctx.member_repo = repo;
        }
        if let Some(repo) = self.client_repo {
            ctx.client_repo = repo;
        }
        if let Some(repo) = self.donation_repo {
            ctx.donation_repo = repo;
        }
        if let Some(repo) = self.medical_donation_repo {
            ctx.medical_donation_repo = repo;
        }
        if let Some(repo) = self.distribution_repo {
            ctx.distribution_repo = repo;
        }
        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_pool() {
        let err = ServiceContextBuilder::new()
            .jwt_service(Arc::new(JwtService::new("secret", 60)))
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "pool is required");
    }
}
