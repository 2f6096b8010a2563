//! Life member service
//!
//! A life member is stored as a donor row plus a membership row; every write
//! here goes through repository methods that touch both in one transaction.

use aid_core::{DomainError, MemberChanges, MemberFilter, NewLifeMember};
use tracing::{info, instrument};

use crate::dto::{
    map_all, CreateMemberRequest, MemberCreatedResponse, MemberQuery, MemberResponse,
    UpdateMemberRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: MemberQuery) -> ServiceResult<Vec<MemberResponse>> {
        let filter = MemberFilter::try_from(query)?;
        let members = self.ctx.member_repo().find_all(&filter).await?;
        Ok(map_all(members))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MemberNotFound(id))?;
        Ok(member.into())
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateMemberRequest) -> ServiceResult<MemberCreatedResponse> {
        let member = NewLifeMember::try_from(request)?;
        let (member_id, donor_id) = self.ctx.member_repo().create(&member).await?;

        info!(member_id, donor_id, "Member created");
        Ok(MemberCreatedResponse {
            member_id,
            donor_id,
        })
    }

    /// Apply a partial update and return the stored member
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateMemberRequest) -> ServiceResult<MemberResponse> {
        let changes = MemberChanges::try_from(request)?;
        self.ctx.member_repo().update(id, &changes).await?;

        info!(member_id = id, "Member updated");
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: i64) -> ServiceResult<()> {
        self.ctx.member_repo().deactivate(id).await?;
        info!(member_id = id, "Member deactivated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.member_repo().delete(id).await?;
        info!(member_id = id, "Member deleted");
        Ok(())
    }
}
