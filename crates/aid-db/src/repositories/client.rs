//! PostgreSQL implementation of ClientRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use aid_core::entities::{Client, ClientChanges, ClientFilter, NewClient};
use aid_core::error::DomainError;
use aid_core::traits::{ClientRepository, RepoResult};
use aid_core::value_objects::validators;
use aid_core::{ClientStatus, Gender, Patch, StatusTransition};

use crate::mappers::{collect_rows, parse_column};
use crate::models::ClientModel;
use crate::update_builder::UpdateBuilder;

use super::error::{like_pattern, map_db_error, map_unique_violation};

/// PostgreSQL implementation of ClientRepository
#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Validate and stage every field except status
    fn stage(changes: &mut ClientChanges) -> RepoResult<UpdateBuilder> {
        let mut update = UpdateBuilder::new("clients");
        update.required(
            "name",
            std::mem::take(&mut changes.name).trimmed(),
            validators::not_blank("Name"),
        )?;
        update.optional("age", std::mem::take(&mut changes.age), validators::validate_age)?;
        update.optional(
            "gender",
            std::mem::take(&mut changes.gender),
            validators::accept::<Gender>,
        )?;
        update.optional(
            "phone",
            std::mem::take(&mut changes.phone).blank_as_clear(),
            |p| validators::validate_phone(p),
        )?;
        for (column, label, patch) in [
            ("address", "Address", &mut changes.address),
            ("city", "City", &mut changes.city),
            ("state", "State", &mut changes.state),
            ("zip", "Zip", &mut changes.zip),
        ] {
            update.required(
                column,
                std::mem::take(patch).trimmed(),
                validators::not_blank(label),
            )?;
        }
        update.optional(
            "notes",
            std::mem::take(&mut changes.notes),
            validators::accept::<String>,
        )?;
        Ok(update)
    }

    /// Lock the client row and return its status, refusing a frozen record
    async fn lock_mutable(conn: &mut PgConnection, id: i64) -> RepoResult<ClientStatus> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT status FROM clients WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(conn)
                .await
                .map_err(map_db_error)?;

        let (status,) = row.ok_or(DomainError::ClientNotFound(id))?;
        let status: ClientStatus = parse_column("status", &status)?;
        if status.freezes_record() {
            return Err(DomainError::TerminalState {
                entity: "client",
                status: status.label(),
            });
        }
        Ok(status)
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Client>> {
        let result = sqlx::query_as::<_, ClientModel>(
            r"
            SELECT id, name, age, gender, phone, address, city, state, zip, aadhaar,
                   status, notes, created_at, updated_at
            FROM clients
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Client::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: &ClientFilter) -> RepoResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClientModel>(
            r"
            SELECT id, name, age, gender, phone, address, city, state, zip, aadhaar,
                   status, notes, created_at, updated_at
            FROM clients
            WHERE ($1::text IS NULL OR name ILIKE $1 OR city ILIKE $1 OR address ILIKE $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(filter.search.as_deref().map(like_pattern))
        .bind(filter.status.map(ClientStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self, client), fields(name = %client.name))]
    async fn create(&self, client: &NewClient) -> RepoResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r"
            INSERT INTO clients (name, age, gender, phone, address, city, state, zip,
                                 aadhaar, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            ",
        )
        .bind(&client.name)
        .bind(client.age)
        .bind(client.gender.map(Gender::as_str))
        .bind(&client.phone)
        .bind(&client.address)
        .bind(&client.city)
        .bind(&client.state)
        .bind(&client.zip)
        .bind(&client.aadhaar)
        .bind(client.status.as_str())
        .bind(&client.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ClientAadhaarExists))?;

        debug!(client_id = id, "Created client");
        Ok(id)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, mut changes: ClientChanges) -> RepoResult<()> {
        let mut update = Self::stage(&mut changes)?;
        let next_status = match changes.status {
            Patch::Unchanged => None,
            Patch::Clear => return Err(DomainError::validation("status cannot be null")),
            Patch::Set(status) => Some(status),
        };
        if update.is_empty() && next_status.is_none() {
            return Err(DomainError::NothingToUpdate);
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let current = Self::lock_mutable(&mut *tx, id).await?;

        if let Some(next) = next_status {
            current.ensure_transition(next)?;
            update.set("status", next);
        }
        update.execute(id, &mut *tx).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        Self::lock_mutable(&mut *tx, id).await?;

        sqlx::query("UPDATE clients SET status = $1, updated_at = NOW() WHERE id = $2")
            .bind(ClientStatus::Inactive.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ClientNotFound(id));
        }
        Ok(())
    }
}
