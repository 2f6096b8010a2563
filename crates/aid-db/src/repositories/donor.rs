//! PostgreSQL implementation of DonorRepository
//!
//! Also home to donor resolution for donations: a donation names its donor
//! either by id or by name, and a name with no matching donor creates one.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use aid_core::entities::{Donor, DonorFilter, DonorRef};
use aid_core::error::DomainError;
use aid_core::traits::{DonorRepository, RepoResult};
use aid_core::DonorType;

use crate::mappers::collect_rows;
use crate::models::DonorModel;

use super::error::{like_pattern, map_db_error};

/// PostgreSQL implementation of DonorRepository
#[derive(Clone)]
pub struct PgDonorRepository {
    pool: PgPool,
}

impl PgDonorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Resolve a donor reference to a donor id inside an open transaction
///
/// An id must exist. A name matches case-insensitively against existing
/// donors, oldest first; with no match a new `Individual` donor is inserted.
pub(crate) async fn resolve_donor(conn: &mut PgConnection, donor: &DonorRef) -> RepoResult<i64> {
    match donor {
        DonorRef::Id(id) => {
            let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM donors WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(map_db_error)?;

            found.map(|(id,)| id).ok_or(DomainError::DonorNotFound(*id))
        }
        DonorRef::Name(name) => {
            let existing: Option<(i64,)> = sqlx::query_as(
                r"
                SELECT id FROM donors
                WHERE LOWER(name) = LOWER($1)
                ORDER BY id
                LIMIT 1
                ",
            )
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
            .map_err(map_db_error)?;

            if let Some((id,)) = existing {
                return Ok(id);
            }

            let (id,): (i64,) = sqlx::query_as(
                r"
                INSERT INTO donors (name, donor_type, status)
                VALUES ($1, $2, 'Active')
                RETURNING id
                ",
            )
            .bind(name)
            .bind(DonorType::Individual.as_str())
            .fetch_one(&mut *conn)
            .await
            .map_err(map_db_error)?;

            debug!(donor_id = id, "Created donor from name");
            Ok(id)
        }
    }
}

#[async_trait]
impl DonorRepository for PgDonorRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Donor>> {
        let result = sqlx::query_as::<_, DonorModel>(
            r"
            SELECT id, name, email, phone, address, donor_type, status, created_at, updated_at
            FROM donors
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Donor::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: &DonorFilter) -> RepoResult<Vec<Donor>> {
        let rows = sqlx::query_as::<_, DonorModel>(
            r"
            SELECT id, name, email, phone, address, donor_type, status, created_at, updated_at
            FROM donors
            WHERE ($1::text IS NULL OR donor_type = $1)
              AND ($2::text IS NULL OR name ILIKE $2 OR email ILIKE $2 OR phone ILIKE $2)
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(filter.donor_type.map(DonorType::as_str))
        .bind(filter.search.as_deref().map(like_pattern))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }
}
