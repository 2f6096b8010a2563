//! Medical donation model -> entity mappers

use aid_core::entities::{MedicalDonation, MedicalDonationStats};
use aid_core::error::DomainError;

use super::parse_column;
use crate::models::{MedicalDonationModel, MedicalDonationStatsModel};

impl TryFrom<MedicalDonationModel> for MedicalDonation {
    type Error = DomainError;

    fn try_from(model: MedicalDonationModel) -> Result<Self, Self::Error> {
        Ok(MedicalDonation {
            category: parse_column("category", &model.category)?,
            status: parse_column("status", &model.status)?,
            id: model.id,
            donor_id: model.donor_id,
            donor_name: model.donor_name,
            donor_email: model.donor_email,
            donor_phone: model.donor_phone,
            item_name: model.item_name,
            strength: model.strength,
            quantity: model.quantity,
            expiry_date: model.expiry_date,
            donation_date: model.donation_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<MedicalDonationStatsModel> for MedicalDonationStats {
    fn from(model: MedicalDonationStatsModel) -> Self {
        MedicalDonationStats {
            total_donations: model.total_donations,
            total_quantity: model.total_quantity,
            unique_donors: model.unique_donors,
            pending_count: model.pending_count,
            approved_count: model.approved_count,
            collected_count: model.collected_count,
            rejected_count: model.rejected_count,
            expired_count: model.expired_count,
            expiring_soon_count: model.expiring_soon_count,
        }
    }
}
