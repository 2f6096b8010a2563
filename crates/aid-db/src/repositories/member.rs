//! PostgreSQL implementation of MemberRepository
//!
//! A life member spans two rows: identity and contact details on `donors`,
//! the membership itself on `life_members`. Every write that touches both
//! runs in one transaction so a failure on either side leaves neither changed.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use aid_core::entities::{LifeMember, MemberChanges, MemberFilter, NewLifeMember};
use aid_core::error::DomainError;
use aid_core::traits::{MemberRepository, RepoResult};
use aid_core::value_objects::validators;
use aid_core::{ActivityStatus, DonorType};

use crate::mappers::collect_rows;
use crate::models::LifeMemberModel;
use crate::update_builder::UpdateBuilder;

use super::error::{like_pattern, map_constraint_violation, map_db_error};

const SELECT_MEMBER: &str = r"
    SELECT lm.id, lm.donor_id, d.name, d.email, d.phone, d.address,
           d.status AS donor_status, lm.aadhar_number, lm.join_date, lm.join_time,
           lm.membership_status, lm.created_at, lm.updated_at
    FROM life_members lm
    JOIN donors d ON d.id = lm.donor_id
";

/// Unique constraints a member write can trip
fn member_conflict(constraint: &str) -> Option<DomainError> {
    match constraint {
        "donors_email_key" => Some(DomainError::MemberEmailExists),
        "life_members_aadhar_number_key" => Some(DomainError::MemberAadharExists),
        _ => None,
    }
}

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Split a change-set into the donor-side and membership-side updates
    ///
    /// Staging validates every supplied field; nothing has been written yet.
    fn stage(changes: &MemberChanges) -> RepoResult<(UpdateBuilder, UpdateBuilder)> {
        let mut donor = UpdateBuilder::new("donors");
        donor.required("name", changes.name.clone().trimmed(), validators::not_blank("Name"))?;
        donor.required("email", changes.email.clone().trimmed(), |e| {
            validators::validate_email(e)
        })?;
        donor.optional("phone", changes.phone.clone().blank_as_clear(), |p| {
            validators::validate_phone(p)
        })?;
        donor.optional(
            "address",
            changes.address.clone().blank_as_clear(),
            validators::accept,
        )?;

        let mut membership = UpdateBuilder::new("life_members");
        membership.required(
            "membership_status",
            changes.membership_status.clone(),
            validators::accept,
        )?;

        Ok((donor, membership))
    }

    /// Lock the membership row and return its donor id
    async fn lock_donor_id(conn: &mut PgConnection, id: i64) -> RepoResult<i64> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT donor_id FROM life_members WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(conn)
                .await
                .map_err(map_db_error)?;

        row.map(|(donor_id,)| donor_id)
            .ok_or(DomainError::MemberNotFound(id))
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<LifeMember>> {
        let result = sqlx::query_as::<_, LifeMemberModel>(&format!(
            "{SELECT_MEMBER} WHERE lm.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(LifeMember::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: &MemberFilter) -> RepoResult<Vec<LifeMember>> {
        let rows = sqlx::query_as::<_, LifeMemberModel>(&format!(
            r"{SELECT_MEMBER}
            WHERE ($1::text IS NULL
                   OR d.name ILIKE $1 OR d.email ILIKE $1
                   OR d.phone ILIKE $1 OR lm.aadhar_number ILIKE $1)
              AND ($2::text IS NULL OR lm.membership_status = $2)
            ORDER BY lm.join_date DESC, lm.join_time DESC, lm.id DESC
            "
        ))
        .bind(filter.search.as_deref().map(like_pattern))
        .bind(filter.status.map(ActivityStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self))]
    async fn donor_id_of(&self, member_id: i64) -> RepoResult<Option<i64>> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT donor_id FROM life_members WHERE id = $1")
            .bind(member_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(|(donor_id,)| donor_id))
    }

    #[instrument(skip(self, member), fields(email = %member.email))]
    async fn create(&self, member: &NewLifeMember) -> RepoResult<(i64, i64)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let (donor_id,): (i64,) = sqlx::query_as(
            r"
            INSERT INTO donors (name, email, phone, address, donor_type, status)
            VALUES ($1, $2, $3, $4, $5, 'Active')
            RETURNING id
            ",
        )
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(&member.address)
        .bind(DonorType::LifeMember.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_constraint_violation(e, member_conflict))?;

        let (member_id,): (i64,) = sqlx::query_as(
            r"
            INSERT INTO life_members (donor_id, aadhar_number, join_date, join_time)
            VALUES ($1, $2, $3, COALESCE($4, LOCALTIME(0)))
            RETURNING id
            ",
        )
        .bind(donor_id)
        .bind(&member.aadhar_number)
        .bind(member.join_date)
        .bind(member.join_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_constraint_violation(e, member_conflict))?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(member_id, donor_id, "Created life member");
        Ok((member_id, donor_id))
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, changes: &MemberChanges) -> RepoResult<()> {
        let (donor, membership) = Self::stage(changes)?;
        if donor.is_empty() && membership.is_empty() {
            return Err(DomainError::NothingToUpdate);
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let donor_id = Self::lock_donor_id(&mut *tx, id).await?;

        if !donor.is_empty() {
            donor
                .execute_with(donor_id, &mut *tx, |e| {
                    map_constraint_violation(e, member_conflict)
                })
                .await?;
        }
        if !membership.is_empty() {
            membership.execute(id, &mut *tx).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let donor_id = Self::lock_donor_id(&mut *tx, id).await?;

        sqlx::query("UPDATE donors SET status = $1, updated_at = NOW() WHERE id = $2")
            .bind(ActivityStatus::Inactive.as_str())
            .bind(donor_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query(
            "UPDATE life_members SET membership_status = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(ActivityStatus::Inactive.as_str())
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // The membership row cascades from the donor row.
        let result = sqlx::query(
            r"
            DELETE FROM donors
            WHERE id = (SELECT donor_id FROM life_members WHERE id = $1)
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MemberNotFound(id));
        }
        Ok(())
    }
}
