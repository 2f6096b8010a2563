//! Distribution model -> entity mappers

use aid_core::entities::{Distribution, DistributionStats};
use aid_core::error::DomainError;

use super::parse_column;
use crate::models::{DistributionModel, DistributionStatsModel};

impl TryFrom<DistributionModel> for Distribution {
    type Error = DomainError;

    fn try_from(model: DistributionModel) -> Result<Self, Self::Error> {
        Ok(Distribution {
            assistance_type: parse_column("assistance_type", &model.assistance_type)?,
            status: parse_column("status", &model.status)?,
            id: model.id,
            client_id: model.client_id,
            client_name: model.client_name,
            client_phone: model.client_phone,
            client_address: model.client_address,
            client_city: model.client_city,
            client_state: model.client_state,
            amount: model.amount,
            quantity: model.quantity,
            unit: model.unit,
            description: model.description,
            assistance_date: model.assistance_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<DistributionStatsModel> for DistributionStats {
    fn from(model: DistributionStatsModel) -> Self {
        DistributionStats {
            total_distributions: model.total_distributions,
            provided_count: model.provided_count,
            pending_count: model.pending_count,
            cancelled_count: model.cancelled_count,
            total_money_distributed: model.total_money_distributed,
            total_medicine_distributed: model.total_medicine_distributed,
            total_equipment_distributed: model.total_equipment_distributed,
        }
    }
}
