//! Donation model -> entity mappers

use aid_core::entities::{Donation, DonationStats};
use aid_core::error::DomainError;

use super::parse_column;
use crate::models::{DonationModel, DonationStatsModel};

impl TryFrom<DonationModel> for Donation {
    type Error = DomainError;

    fn try_from(model: DonationModel) -> Result<Self, Self::Error> {
        Ok(Donation {
            donor_type: parse_column("donor_type", &model.donor_type)?,
            status: parse_column("status", &model.status)?,
            id: model.id,
            donor_id: model.donor_id,
            donor_name: model.donor_name,
            donor_email: model.donor_email,
            donor_phone: model.donor_phone,
            amount: model.amount,
            date: model.date,
            payment_mode: model.payment_mode,
            purpose: model.purpose,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<DonationStatsModel> for DonationStats {
    fn from(model: DonationStatsModel) -> Self {
        DonationStats {
            total_amount: model.total_amount,
            total_count: model.total_count,
            completed_count: model.completed_count,
            pending_count: model.pending_count,
            monthly_amount: model.monthly_amount,
        }
    }
}
