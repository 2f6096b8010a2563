//! Donor model -> entity mapper

use aid_core::entities::Donor;
use aid_core::error::DomainError;

use super::parse_column;
use crate::models::DonorModel;

impl TryFrom<DonorModel> for Donor {
    type Error = DomainError;

    fn try_from(model: DonorModel) -> Result<Self, Self::Error> {
        Ok(Donor {
            donor_type: parse_column("donor_type", &model.donor_type)?,
            status: parse_column("status", &model.status)?,
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
