//! Life member model -> entity mapper

use aid_core::entities::LifeMember;
use aid_core::error::DomainError;

use super::parse_column;
use crate::models::LifeMemberModel;

impl TryFrom<LifeMemberModel> for LifeMember {
    type Error = DomainError;

    fn try_from(model: LifeMemberModel) -> Result<Self, Self::Error> {
        Ok(LifeMember {
            donor_status: parse_column("donors.status", &model.donor_status)?,
            membership_status: parse_column("membership_status", &model.membership_status)?,
            id: model.id,
            donor_id: model.donor_id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            aadhar_number: model.aadhar_number,
            join_date: model.join_date,
            join_time: model.join_time,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
