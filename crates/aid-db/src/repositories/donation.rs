//! PostgreSQL implementation of DonationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use aid_core::entities::{Donation, DonationChanges, DonationFilter, DonationStats, NewDonation};
use aid_core::error::DomainError;
use aid_core::traits::{DonationRepository, RepoResult};
use aid_core::value_objects::validators;
use aid_core::{DonationStatus, DonorType, Patch, StatusTransition};

use crate::mappers::{collect_rows, parse_column};
use crate::models::{DonationModel, DonationStatsModel};
use crate::update_builder::UpdateBuilder;

use super::donor::resolve_donor;
use super::error::{like_pattern, map_db_error};

const SELECT_DONATION: &str = r"
    SELECT dn.id, dn.donor_id, d.name AS donor_name, d.donor_type,
           d.email AS donor_email, d.phone AS donor_phone,
           dn.amount, dn.date, dn.payment_mode, dn.purpose, dn.status, dn.notes,
           dn.created_at, dn.updated_at
    FROM donations dn
    JOIN donors d ON d.id = dn.donor_id
";

/// PostgreSQL implementation of DonationRepository
#[derive(Clone)]
pub struct PgDonationRepository {
    pool: PgPool,
}

impl PgDonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn stage(changes: &mut DonationChanges) -> RepoResult<UpdateBuilder> {
        let mut update = UpdateBuilder::new("donations");
        update.required(
            "amount",
            std::mem::take(&mut changes.amount),
            validators::validate_amount,
        )?;
        update.required("date", std::mem::take(&mut changes.date), validators::accept)?;
        update.required(
            "payment_mode",
            std::mem::take(&mut changes.payment_mode).trimmed(),
            validators::not_blank("Payment mode"),
        )?;
        update.required(
            "purpose",
            std::mem::take(&mut changes.purpose).trimmed(),
            validators::not_blank("Purpose"),
        )?;
        update.optional(
            "notes",
            std::mem::take(&mut changes.notes),
            validators::accept::<String>,
        )?;
        Ok(update)
    }
}

#[async_trait]
impl DonationRepository for PgDonationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Donation>> {
        let result = sqlx::query_as::<_, DonationModel>(&format!(
            "{SELECT_DONATION} WHERE dn.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Donation::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: &DonationFilter) -> RepoResult<Vec<Donation>> {
        let rows = sqlx::query_as::<_, DonationModel>(&format!(
            r"{SELECT_DONATION}
            WHERE ($1::text IS NULL OR dn.status = $1)
              AND ($2::text IS NULL OR d.name ILIKE $2 OR dn.purpose ILIKE $2)
              AND ($3::date IS NULL OR dn.date >= $3)
              AND ($4::date IS NULL OR dn.date <= $4)
              AND ($5::text IS NULL OR d.donor_type = $5)
            ORDER BY dn.date DESC, dn.created_at DESC
            LIMIT $6 OFFSET $7
            "
        ))
        .bind(filter.status.map(DonationStatus::as_str))
        .bind(filter.search.as_deref().map(like_pattern))
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(filter.donor_type.map(DonorType::as_str))
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_donor(&self, donor_id: i64) -> RepoResult<Vec<Donation>> {
        let rows = sqlx::query_as::<_, DonationModel>(&format!(
            "{SELECT_DONATION} WHERE dn.donor_id = $1 ORDER BY dn.date DESC, dn.created_at DESC"
        ))
        .bind(donor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self, donation), fields(amount = %donation.amount))]
    async fn create(&self, donation: &NewDonation) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let donor_id = resolve_donor(&mut *tx, &donation.donor).await?;

        let (id,): (i64,) = sqlx::query_as(
            r"
            INSERT INTO donations (donor_id, amount, date, payment_mode, purpose, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(donor_id)
        .bind(donation.amount)
        .bind(donation.date)
        .bind(&donation.payment_mode)
        .bind(&donation.purpose)
        .bind(donation.status.as_str())
        .bind(&donation.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(donation_id = id, donor_id, "Recorded donation");
        Ok(id)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, mut changes: DonationChanges) -> RepoResult<()> {
        let mut update = Self::stage(&mut changes)?;
        let next_status = match changes.status {
            Patch::Unchanged => None,
            Patch::Clear => return Err(DomainError::validation("status cannot be null")),
            Patch::Set(status) => Some(status),
        };
        if update.is_empty() && next_status.is_none() && changes.donor.is_none() {
            return Err(DomainError::NothingToUpdate);
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row: Option<(String,)> =
            sqlx::query_as("SELECT status FROM donations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?;
        let (current,) = row.ok_or(DomainError::DonationNotFound(id))?;
        let current: DonationStatus = parse_column("status", &current)?;

        if let Some(next) = next_status {
            current.ensure_transition(next)?;
            update.set("status", next);
        }
        if let Some(donor) = &changes.donor {
            let donor_id = resolve_donor(&mut *tx, donor).await?;
            update.set("donor_id", donor_id);
        }
        update.execute(id, &mut *tx).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM donations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DonationNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self, month: u32, year: i32) -> RepoResult<DonationStats> {
        let model = sqlx::query_as::<_, DonationStatsModel>(
            r"
            SELECT
                COALESCE(SUM(amount) FILTER (WHERE status = 'Completed'), 0) AS total_amount,
                COUNT(*) AS total_count,
                COUNT(*) FILTER (WHERE status = 'Completed') AS completed_count,
                COUNT(*) FILTER (WHERE status = 'Pending') AS pending_count,
                COALESCE(SUM(amount) FILTER (
                    WHERE status = 'Completed'
                      AND EXTRACT(MONTH FROM date)::int = $1
                      AND EXTRACT(YEAR FROM date)::int = $2
                ), 0) AS monthly_amount
            FROM donations
            ",
        )
        .bind(i32::try_from(month).unwrap_or(0))
        .bind(year)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(DonationStats::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgDonationRepository>();
    }

    #[test]
    fn test_stage_rejects_non_positive_amount() {
        let mut changes = DonationChanges {
            amount: Patch::Set(Decimal::ZERO),
            ..Default::default()
        };
        let err = PgDonationRepository::stage(&mut changes).unwrap_err();
        assert_eq!(err.to_string(), "Amount must be greater than 0");
    }

    #[test]
    fn test_stage_refuses_clearing_required_columns() {
        let mut changes = DonationChanges {
            purpose: Patch::Clear,
            ..Default::default()
        };
        assert!(PgDonationRepository::stage(&mut changes).is_err());

        let mut changes = DonationChanges {
            notes: Patch::Clear,
            ..Default::default()
        };
        let update = PgDonationRepository::stage(&mut changes).unwrap();
        assert_eq!(update.columns().collect::<Vec<_>>(), vec!["notes"]);
    }
}
