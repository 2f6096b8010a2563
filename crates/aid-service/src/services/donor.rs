//! Donor lookups
//!
//! Donors are written through members, donations and medical donations;
//! this service only reads them.

use aid_core::{DomainError, DonorFilter};
use tracing::instrument;

use crate::dto::{map_all, DonorQuery, DonorResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct DonorService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DonorService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: DonorQuery) -> ServiceResult<Vec<DonorResponse>> {
        let filter = DonorFilter::try_from(query)?;
        let donors = self.ctx.donor_repo().find_all(&filter).await?;
        Ok(map_all(donors))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<DonorResponse> {
        let donor = self
            .ctx
            .donor_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::DonorNotFound(id))?;
        Ok(donor.into())
    }
}
