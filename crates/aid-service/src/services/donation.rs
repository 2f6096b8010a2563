//! Monetary donation service

use aid_core::{DomainError, DonationChanges, DonationFilter, NewDonation};
use chrono::{Datelike, Utc};
use tracing::{info, instrument};

use crate::dto::{
    map_all, CreateDonationRequest, DonationQuery, DonationResponse, DonationStatsResponse,
    StatsQuery, UpdateDonationRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct DonationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DonationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: DonationQuery) -> ServiceResult<Vec<DonationResponse>> {
        let filter = DonationFilter::try_from(query)?;
        let donations = self.ctx.donation_repo().find_all(&filter).await?;
        Ok(map_all(donations))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<DonationResponse> {
        let donation = self
            .ctx
            .donation_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::DonationNotFound(id))?;
        Ok(donation.into())
    }

    #[instrument(skip(self))]
    pub async fn by_donor(&self, donor_id: i64) -> ServiceResult<Vec<DonationResponse>> {
        let donations = self.ctx.donation_repo().find_by_donor(donor_id).await?;
        Ok(map_all(donations))
    }

    /// Donations of the donor behind a life membership
    #[instrument(skip(self))]
    pub async fn by_life_member(&self, member_id: i64) -> ServiceResult<Vec<DonationResponse>> {
        let donor_id = self
            .ctx
            .member_repo()
            .donor_id_of(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Life member", member_id))?;

        self.by_donor(donor_id).await
    }

    /// Record a donation, creating the donor by name if needed
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateDonationRequest) -> ServiceResult<DonationResponse> {
        let donation = NewDonation::try_from(request)?;
        let id = self.ctx.donation_repo().create(&donation).await?;

        info!(donation_id = id, amount = %donation.amount, "Donation created");
        self.get(id).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateDonationRequest) -> ServiceResult<DonationResponse> {
        let changes = DonationChanges::try_from(request)?;
        self.ctx.donation_repo().update(id, changes).await?;

        info!(donation_id = id, "Donation updated");
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.donation_repo().delete(id).await?;
        info!(donation_id = id, "Donation deleted");
        Ok(())
    }

    /// Totals plus the completed amount for one month (default: the current one)
    #[instrument(skip(self))]
    pub async fn stats(&self, query: StatsQuery) -> ServiceResult<DonationStatsResponse> {
        let today = Utc::now().date_naive();
        let month = query.month.unwrap_or_else(|| today.month());
        let year = query.year.unwrap_or_else(|| today.year());

        if !(1..=12).contains(&month) {
            return Err(ServiceError::validation("Month must be between 1 and 12"));
        }

        let stats = self.ctx.donation_repo().stats(month, year).await?;
        Ok(stats.into())
    }
}
