//! Client model -> entity mapper

use aid_core::entities::Client;
use aid_core::error::DomainError;

use super::parse_column;
use crate::models::ClientModel;

impl TryFrom<ClientModel> for Client {
    type Error = DomainError;

    fn try_from(model: ClientModel) -> Result<Self, Self::Error> {
        let gender = model
            .gender
            .as_deref()
            .map(|g| parse_column("gender", g))
            .transpose()?;

        Ok(Client {
            gender,
            status: parse_column("status", &model.status)?,
            id: model.id,
            name: model.name,
            age: model.age,
            phone: model.phone,
            address: model.address,
            city: model.city,
            state: model.state,
            zip: model.zip,
            aadhaar: model.aadhaar,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
