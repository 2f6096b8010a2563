//! PostgreSQL implementation of MedicalDonationRepository
//!
//! Category, strength and expiry are interdependent: equipment carries
//! neither strength nor expiry, medicines and supplements need a strength.
//! Updates reconcile the supplied fields against the stored row under a row
//! lock before anything is written.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use aid_core::entities::{
    MedicalDonation, MedicalDonationChanges, MedicalDonationStats, NewMedicalDonation,
};
use aid_core::error::DomainError;
use aid_core::traits::{MedicalDonationRepository, RepoResult};
use aid_core::value_objects::validators;
use aid_core::{MedicalCategory, MedicalDonationStatus, Patch, StatusTransition};

use crate::mappers::{collect_rows, parse_column};
use crate::models::{MedicalDonationModel, MedicalDonationStatsModel};
use crate::update_builder::UpdateBuilder;

use super::donor::resolve_donor;
use super::error::map_db_error;

const SELECT_MEDICAL: &str = r"
    SELECT md.id, md.donor_id, d.name AS donor_name, d.email AS donor_email,
           d.phone AS donor_phone, md.item_name, md.category, md.strength,
           md.quantity, md.expiry_date, md.status, md.donation_date,
           md.created_at, md.updated_at
    FROM medical_donations md
    JOIN donors d ON d.id = md.donor_id
";

/// Window used by the expiring-soon count in stats
const EXPIRING_SOON_DAYS: i32 = 30;

/// PostgreSQL implementation of MedicalDonationRepository
#[derive(Clone)]
pub struct PgMedicalDonationRepository {
    pool: PgPool,
}

impl PgMedicalDonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, sql: &str, bind: Option<i64>) -> RepoResult<Vec<MedicalDonation>> {
        let mut query = sqlx::query_as::<_, MedicalDonationModel>(sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(map_db_error)?;
        collect_rows(rows)
    }
}

#[async_trait]
impl MedicalDonationRepository for PgMedicalDonationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MedicalDonation>> {
        let result = sqlx::query_as::<_, MedicalDonationModel>(&format!(
            "{SELECT_MEDICAL} WHERE md.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MedicalDonation::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<MedicalDonation>> {
        self.fetch_many(
            &format!("{SELECT_MEDICAL} ORDER BY md.donation_date DESC, md.created_at DESC"),
            None,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn find_by_status(
        &self,
        status: MedicalDonationStatus,
    ) -> RepoResult<Vec<MedicalDonation>> {
        let rows = sqlx::query_as::<_, MedicalDonationModel>(&format!(
            "{SELECT_MEDICAL} WHERE md.status = $1 \
             ORDER BY md.donation_date DESC, md.created_at DESC"
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_donor(&self, donor_id: i64) -> RepoResult<Vec<MedicalDonation>> {
        self.fetch_many(
            &format!(
                "{SELECT_MEDICAL} WHERE md.donor_id = $1 \
                 ORDER BY md.donation_date DESC, md.created_at DESC"
            ),
            Some(donor_id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn find_expiring(&self, days: i32) -> RepoResult<Vec<MedicalDonation>> {
        let rows = sqlx::query_as::<_, MedicalDonationModel>(&format!(
            r"{SELECT_MEDICAL}
            WHERE md.expiry_date IS NOT NULL
              AND md.expiry_date BETWEEN CURRENT_DATE AND CURRENT_DATE + $1::int
              AND md.status IN ('pending', 'approved')
            ORDER BY md.expiry_date ASC
            "
        ))
        .bind(days)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self))]
    async fn find_expired(&self) -> RepoResult<Vec<MedicalDonation>> {
        self.fetch_many(
            &format!(
                r"{SELECT_MEDICAL}
                WHERE md.expiry_date IS NOT NULL
                  AND md.expiry_date < CURRENT_DATE
                  AND md.status IN ('pending', 'approved')
                ORDER BY md.expiry_date DESC
                "
            ),
            None,
        )
        .await
    }

    #[instrument(skip(self, donation), fields(item = %donation.item_name))]
    async fn create(&self, donation: &NewMedicalDonation) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let donor_id = resolve_donor(&mut *tx, &donation.donor).await?;

        let (id,): (i64,) = sqlx::query_as(
            r"
            INSERT INTO medical_donations
                (donor_id, item_name, category, strength, quantity, expiry_date, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(donor_id)
        .bind(&donation.item_name)
        .bind(donation.category.as_str())
        .bind(&donation.strength)
        .bind(donation.quantity)
        .bind(donation.expiry_date)
        .bind(donation.status.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(medical_donation_id = id, donor_id, "Recorded medical donation");
        Ok(id)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, mut changes: MedicalDonationChanges) -> RepoResult<()> {
        let mut update = UpdateBuilder::new("medical_donations");
        update.required(
            "item_name",
            std::mem::take(&mut changes.item_name).trimmed(),
            validators::not_blank("Item name"),
        )?;
        update.required(
            "quantity",
            std::mem::take(&mut changes.quantity),
            validators::validate_quantity,
        )?;
        if matches!(changes.category, Patch::Clear) {
            return Err(DomainError::validation("category cannot be null"));
        }
        if matches!(changes.status, Patch::Clear) {
            return Err(DomainError::validation("status cannot be null"));
        }
        let deferred = changes.category.is_present()
            || changes.strength.is_present()
            || changes.expiry_date.is_present()
            || changes.status.is_present()
            || changes.donor.is_some();
        if update.is_empty() && !deferred {
            return Err(DomainError::NothingToUpdate);
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row: Option<(String, String, Option<String>)> = sqlx::query_as(
            "SELECT status, category, strength FROM medical_donations WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;
        let (status, category, strength) =
            row.ok_or(DomainError::MedicalDonationNotFound(id))?;
        let current_status: MedicalDonationStatus = parse_column("status", &status)?;
        let current_category: MedicalCategory = parse_column("category", &category)?;

        changes.reconcile(current_category, strength.as_deref())?;

        update.required("category", changes.category, validators::accept)?;
        update.optional(
            "strength",
            changes.strength.trimmed(),
            validators::accept::<String>,
        )?;
        update.optional("expiry_date", changes.expiry_date, validators::accept)?;

        if let Patch::Set(next) = changes.status {
            current_status.ensure_transition(next)?;
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
        let result = sqlx::query("DELETE FROM medical_donations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MedicalDonationNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<MedicalDonationStats> {
        let model = sqlx::query_as::<_, MedicalDonationStatsModel>(
            r"
            SELECT
                COUNT(*) AS total_donations,
                COALESCE(SUM(quantity), 0)::bigint AS total_quantity,
                COUNT(DISTINCT donor_id) AS unique_donors,
                COUNT(*) FILTER (WHERE status = 'pending') AS pending_count,
                COUNT(*) FILTER (WHERE status = 'approved') AS approved_count,
                COUNT(*) FILTER (WHERE status = 'collected') AS collected_count,
                COUNT(*) FILTER (WHERE status = 'rejected') AS rejected_count,
                COUNT(*) FILTER (WHERE expiry_date < CURRENT_DATE) AS expired_count,
                COUNT(*) FILTER (
                    WHERE expiry_date BETWEEN CURRENT_DATE AND CURRENT_DATE + $1::int
                ) AS expiring_soon_count
            FROM medical_donations
            ",
        )
        .bind(EXPIRING_SOON_DAYS)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(MedicalDonationStats::from(model))
    }
}
