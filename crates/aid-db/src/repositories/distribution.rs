//! PostgreSQL implementation of DistributionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use aid_core::entities::{
    Distribution, DistributionChanges, DistributionFilter, DistributionStats, NewDistribution,
};
use aid_core::error::DomainError;
use aid_core::traits::{DistributionRepository, RepoResult};
use aid_core::value_objects::validators;
use aid_core::{AssistanceType, DistributionStatus, Patch, StatusTransition};
use rust_decimal::Decimal;

use crate::mappers::{collect_rows, parse_column};
use crate::models::{DistributionModel, DistributionStatsModel};
use crate::update_builder::UpdateBuilder;

use super::error::{like_pattern, map_db_error, map_foreign_key_violation};

const SELECT_DISTRIBUTION: &str = r"
    SELECT ds.id, ds.client_id, c.name AS client_name, c.phone AS client_phone,
           c.address AS client_address, c.city AS client_city, c.state AS client_state,
           ds.assistance_type, ds.amount, ds.quantity, ds.unit, ds.description,
           ds.assistance_date, ds.status, ds.created_at, ds.updated_at
    FROM distributions ds
    JOIN clients c ON c.id = ds.client_id
";

/// PostgreSQL implementation of DistributionRepository
#[derive(Clone)]
pub struct PgDistributionRepository {
    pool: PgPool,
}

impl PgDistributionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DistributionRepository for PgDistributionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Distribution>> {
        let result = sqlx::query_as::<_, DistributionModel>(&format!(
            "{SELECT_DISTRIBUTION} WHERE ds.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Distribution::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: &DistributionFilter) -> RepoResult<Vec<Distribution>> {
        let rows = sqlx::query_as::<_, DistributionModel>(&format!(
            r"{SELECT_DISTRIBUTION}
            WHERE ($1::bigint IS NULL OR ds.client_id = $1)
              AND ($2::text IS NULL OR ds.assistance_type = $2)
              AND ($3::text IS NULL OR ds.status = $3)
              AND ($4::date IS NULL OR ds.assistance_date >= $4)
              AND ($5::date IS NULL OR ds.assistance_date <= $5)
              AND ($6::text IS NULL
                   OR c.name ILIKE $6 OR c.phone ILIKE $6 OR ds.description ILIKE $6)
            ORDER BY ds.assistance_date DESC, ds.created_at DESC
            "
        ))
        .bind(filter.client_id)
        .bind(filter.assistance_type.map(AssistanceType::as_str))
        .bind(filter.status.map(DistributionStatus::as_str))
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(filter.search.as_deref().map(like_pattern))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_client(&self, client_id: i64) -> RepoResult<Vec<Distribution>> {
        let rows = sqlx::query_as::<_, DistributionModel>(&format!(
            "{SELECT_DISTRIBUTION} WHERE ds.client_id = $1 ORDER BY ds.assistance_date DESC"
        ))
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self, distribution), fields(client_id = distribution.client_id))]
    async fn create(&self, distribution: &NewDistribution) -> RepoResult<i64> {
        let client_id = distribution.client_id;
        let (id,): (i64,) = sqlx::query_as(
            r"
            INSERT INTO distributions
                (client_id, assistance_type, amount, quantity, unit, description,
                 assistance_date, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            ",
        )
        .bind(client_id)
        .bind(distribution.assistance_type.as_str())
        .bind(distribution.amount)
        .bind(distribution.quantity)
        .bind(&distribution.unit)
        .bind(&distribution.description)
        .bind(distribution.assistance_date)
        .bind(distribution.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::ClientNotFound(client_id)))?;

        debug!(distribution_id = id, "Recorded distribution");
        Ok(id)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, mut changes: DistributionChanges) -> RepoResult<()> {
        let mut update = UpdateBuilder::new("distributions");
        if let Some(client_id) = changes.client_id {
            update.set("client_id", client_id);
        }
        update.required(
            "assistance_date",
            std::mem::take(&mut changes.assistance_date),
            validators::accept,
        )?;
        update.optional(
            "description",
            std::mem::take(&mut changes.description),
            validators::accept::<String>,
        )?;
        if matches!(changes.assistance_type, Patch::Clear) {
            return Err(DomainError::validation("assistance_type cannot be null"));
        }
        if matches!(changes.status, Patch::Clear) {
            return Err(DomainError::validation("status cannot be null"));
        }
        let deferred = changes.assistance_type.is_present()
            || changes.amount.is_present()
            || changes.quantity.is_present()
            || changes.unit.is_present()
            || changes.status.is_present();
        if update.is_empty() && !deferred {
            return Err(DomainError::NothingToUpdate);
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row: Option<(String, String, Option<Decimal>, Option<i32>)> = sqlx::query_as(
            r"
            SELECT status, assistance_type, amount, quantity
            FROM distributions
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;
        let (status, kind, amount, quantity) =
            row.ok_or(DomainError::DistributionNotFound(id))?;
        let current_status: DistributionStatus = parse_column("status", &status)?;
        let current_kind: AssistanceType = parse_column("assistance_type", &kind)?;

        changes.reconcile(current_kind, amount, quantity)?;

        update.required("assistance_type", changes.assistance_type, validators::accept)?;
        update.optional("amount", changes.amount, validators::validate_amount)?;
        update.optional("quantity", changes.quantity, validators::validate_quantity)?;
        update.optional("unit", changes.unit, validators::accept::<String>)?;

        if let Patch::Set(next) = changes.status {
            current_status.ensure_transition(next)?;
            update.set("status", next);
        }

        let client_id = changes.client_id.unwrap_or_default();
        update
            .execute_with(id, &mut *tx, |e| {
                map_foreign_key_violation(e, || DomainError::ClientNotFound(client_id))
            })
            .await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM distributions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DistributionNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<DistributionStats> {
        let model = sqlx::query_as::<_, DistributionStatsModel>(
            r"
            SELECT
                COUNT(*) AS total_distributions,
                COUNT(*) FILTER (WHERE status = 'provided') AS provided_count,
                COUNT(*) FILTER (WHERE status = 'pending') AS pending_count,
                COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled_count,
                COALESCE(SUM(amount) FILTER (
                    WHERE assistance_type = 'money' AND status = 'provided'
                ), 0) AS total_money_distributed,
                COALESCE(SUM(quantity) FILTER (
                    WHERE assistance_type = 'medicine' AND status = 'provided'
                ), 0)::bigint AS total_medicine_distributed,
                COALESCE(SUM(quantity) FILTER (
                    WHERE assistance_type = 'equipment' AND status = 'provided'
                ), 0)::bigint AS total_equipment_distributed
            FROM distributions
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(DistributionStats::from(model))
    }
}
