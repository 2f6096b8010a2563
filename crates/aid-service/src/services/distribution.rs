//! Distribution service - aid handed to clients

use aid_core::{DistributionChanges, DistributionFilter, DistributionStatus, DomainError, NewDistribution};
use tracing::{info, instrument};

use crate::dto::{
    map_all, CreateDistributionRequest, DistributionQuery, DistributionResponse,
    DistributionStatsResponse, StatusRequest, UpdateDistributionRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct DistributionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DistributionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: DistributionQuery) -> ServiceResult<Vec<DistributionResponse>> {
        let filter = DistributionFilter::try_from(query)?;
        let rows = self.ctx.distribution_repo().find_all(&filter).await?;
        Ok(map_all(rows))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<DistributionResponse> {
        let row = self
            .ctx
            .distribution_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::DistributionNotFound(id))?;
        Ok(row.into())
    }

    #[instrument(skip(self))]
    pub async fn by_client(&self, client_id: i64) -> ServiceResult<Vec<DistributionResponse>> {
        let rows = self.ctx.distribution_repo().find_by_client(client_id).await?;
        Ok(map_all(rows))
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateDistributionRequest) -> ServiceResult<DistributionResponse> {
        let distribution = NewDistribution::try_from(request)?;
        let id = self.ctx.distribution_repo().create(&distribution).await?;

        info!(
            distribution_id = id,
            client_id = distribution.client_id,
            assistance_type = %distribution.assistance_type,
            "Distribution created"
        );
        self.get(id).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdateDistributionRequest,
    ) -> ServiceResult<DistributionResponse> {
        let changes = DistributionChanges::try_from(request)?;
        self.ctx.distribution_repo().update(id, changes).await?;

        info!(distribution_id = id, "Distribution updated");
        self.get(id).await
    }

    /// Status-only change; a provided distribution stays provided
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        id: i64,
        request: StatusRequest,
    ) -> ServiceResult<DistributionResponse> {
        let status: DistributionStatus = request
            .status
            .ok_or_else(|| {
                ServiceError::validation("Invalid status. Must be: provided, pending, or cancelled")
            })?
            .parse()?;

        self.ctx
            .distribution_repo()
            .update(id, DistributionChanges::status_only(status))
            .await?;

        info!(distribution_id = id, %status, "Distribution status updated");
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.distribution_repo().delete(id).await?;
        info!(distribution_id = id, "Distribution deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<DistributionStatsResponse> {
        let stats = self.ctx.distribution_repo().stats().await?;
        Ok(stats.into())
    }
}
