//! Client (aid recipient) service

use aid_core::{ClientChanges, ClientFilter, DomainError, NewClient};
use tracing::{info, instrument};

use crate::dto::{map_all, ClientQuery, ClientResponse, CreateClientRequest, UpdateClientRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ClientService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClientService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: ClientQuery) -> ServiceResult<Vec<ClientResponse>> {
        let filter = ClientFilter::try_from(query)?;
        let clients = self.ctx.client_repo().find_all(&filter).await?;
        Ok(map_all(clients))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ClientResponse> {
        let client = self
            .ctx
            .client_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ClientNotFound(id))?;
        Ok(client.into())
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateClientRequest) -> ServiceResult<ClientResponse> {
        let client = NewClient::try_from(request)?;
        let id = self.ctx.client_repo().create(&client).await?;

        info!(client_id = id, "Client created");
        self.get(id).await
    }

    /// Partial update; a Dead client refuses every change
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateClientRequest) -> ServiceResult<ClientResponse> {
        let changes = ClientChanges::try_from(request)?;
        self.ctx.client_repo().update(id, changes).await?;

        info!(client_id = id, "Client updated");
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: i64) -> ServiceResult<()> {
        self.ctx.client_repo().deactivate(id).await?;
        info!(client_id = id, "Client deactivated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.client_repo().delete(id).await?;
        info!(client_id = id, "Client deleted");
        Ok(())
    }
}
