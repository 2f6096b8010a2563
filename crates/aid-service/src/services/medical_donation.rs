//! Medical donation service
//!
//! Category rules (strength for medicines, no strength or expiry for
//! equipment) are applied on create here and re-checked against the locked
//! row on update by the repository.

use aid_core::{DomainError, MedicalDonationChanges, MedicalDonationStatus, NewMedicalDonation};
use tracing::{info, instrument};

use crate::dto::{
    map_all, CreateMedicalDonationRequest, ExpiringQuery, MedicalDonationResponse,
    MedicalDonationStatsResponse, StatusRequest, UpdateMedicalDonationRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Window used by `/expiring` when no `days` is given
pub const DEFAULT_EXPIRING_DAYS: i32 = 30;
const MAX_EXPIRING_DAYS: i32 = 365;

pub struct MedicalDonationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MedicalDonationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<MedicalDonationResponse>> {
        let donations = self.ctx.medical_donation_repo().find_all().await?;
        Ok(map_all(donations))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<MedicalDonationResponse> {
        let donation = self
            .ctx
            .medical_donation_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MedicalDonationNotFound(id))?;
        Ok(donation.into())
    }

    #[instrument(skip(self))]
    pub async fn by_status(&self, status: &str) -> ServiceResult<Vec<MedicalDonationResponse>> {
        let status: MedicalDonationStatus = status.parse()?;
        let donations = self.ctx.medical_donation_repo().find_by_status(status).await?;
        Ok(map_all(donations))
    }

    #[instrument(skip(self))]
    pub async fn by_donor(&self, donor_id: i64) -> ServiceResult<Vec<MedicalDonationResponse>> {
        let donations = self.ctx.medical_donation_repo().find_by_donor(donor_id).await?;
        Ok(map_all(donations))
    }

    /// Open donations whose expiry falls within the next `days` days
    #[instrument(skip(self))]
    pub async fn expiring(&self, query: ExpiringQuery) -> ServiceResult<Vec<MedicalDonationResponse>> {
        let days = query.days.unwrap_or(DEFAULT_EXPIRING_DAYS);
        if !(1..=MAX_EXPIRING_DAYS).contains(&days) {
            return Err(ServiceError::validation(format!(
                "Days must be between 1 and {MAX_EXPIRING_DAYS}"
            )));
        }

        let donations = self.ctx.medical_donation_repo().find_expiring(days).await?;
        Ok(map_all(donations))
    }

    #[instrument(skip(self))]
    pub async fn expired(&self) -> ServiceResult<Vec<MedicalDonationResponse>> {
        let donations = self.ctx.medical_donation_repo().find_expired().await?;
        Ok(map_all(donations))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreateMedicalDonationRequest,
    ) -> ServiceResult<MedicalDonationResponse> {
        let donation = NewMedicalDonation::try_from(request)?;
        let id = self.ctx.medical_donation_repo().create(&donation).await?;

        info!(medical_donation_id = id, category = %donation.category, "Medical donation created");
        self.get(id).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdateMedicalDonationRequest,
    ) -> ServiceResult<MedicalDonationResponse> {
        let changes = MedicalDonationChanges::try_from(request)?;
        self.ctx.medical_donation_repo().update(id, changes).await?;

        info!(medical_donation_id = id, "Medical donation updated");
        self.get(id).await
    }

    /// Status-only change, guarded like a full update
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        id: i64,
        request: StatusRequest,
    ) -> ServiceResult<MedicalDonationResponse> {
        let status: MedicalDonationStatus = request
            .status
            .ok_or_else(|| ServiceError::validation("Status is required"))?
            .parse()?;

        self.ctx
            .medical_donation_repo()
            .update(id, MedicalDonationChanges::status_only(status))
            .await?;

        info!(medical_donation_id = id, %status, "Medical donation status updated");
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.medical_donation_repo().delete(id).await?;
        info!(medical_donation_id = id, "Medical donation deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<MedicalDonationStatsResponse> {
        let stats = self.ctx.medical_donation_repo().stats().await?;
        Ok(stats.into())
    }
}
