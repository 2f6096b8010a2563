//! Distribution entity - aid handed to a client
//!
//! Money is measured by `amount`; medicine and equipment by `quantity` and an
//! optional `unit`. The measure that does not apply to the type is NULL.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::DomainError;
use crate::value_objects::{AssistanceType, DistributionStatus, Patch};

const AMOUNT_REQUIRED: &str = "Amount is required for money assistance";
const QUANTITY_REQUIRED: &str = "Quantity is required for medicine/equipment assistance";

/// Distribution joined with the client's contact details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub client_address: String,
    pub client_city: String,
    pub client_state: String,
    pub assistance_type: AssistanceType,
    pub amount: Option<Decimal>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub assistance_date: NaiveDate,
    pub status: DistributionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDistribution {
    pub client_id: i64,
    pub assistance_type: AssistanceType,
    pub amount: Option<Decimal>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub assistance_date: NaiveDate,
    pub status: DistributionStatus,
}

impl NewDistribution {
    /// Require the measure that fits the assistance type and drop the other
    pub fn normalized(mut self) -> Result<Self, DomainError> {
        if self.assistance_type.is_money() {
            if self.amount.is_none() {
                return Err(DomainError::validation(AMOUNT_REQUIRED));
            }
            self.quantity = None;
            self.unit = None;
        } else {
            if self.quantity.is_none() {
                return Err(DomainError::validation(QUANTITY_REQUIRED));
            }
            self.amount = None;
        }
        Ok(self)
    }
}

/// Sparse update to a distribution
#[derive(Debug, Clone, Default)]
pub struct DistributionChanges {
    pub client_id: Option<i64>,
    pub assistance_type: Patch<AssistanceType>,
    pub amount: Patch<Decimal>,
    pub quantity: Patch<i32>,
    pub unit: Patch<String>,
    pub description: Patch<String>,
    pub assistance_date: Patch<NaiveDate>,
    pub status: Patch<DistributionStatus>,
}

impl DistributionChanges {
    pub fn status_only(status: DistributionStatus) -> Self {
        Self {
            status: Patch::Set(status),
            ..Default::default()
        }
    }

    /// Re-check the measure rules against the stored row.
    ///
    /// The measure that does not apply to the resulting type is cleared,
    /// whether the type is switching or a stray value was supplied for it.
    /// The one that does apply must end up non-null.
    pub fn reconcile(
        &mut self,
        current_type: AssistanceType,
        current_amount: Option<Decimal>,
        current_quantity: Option<i32>,
    ) -> Result<(), DomainError> {
        if !(self.assistance_type.is_present()
            || self.amount.is_present()
            || self.quantity.is_present()
            || self.unit.is_present())
        {
            return Ok(());
        }

        let kind = self.assistance_type.value().copied().unwrap_or(current_type);
        let switching = kind != current_type;

        if kind.is_money() {
            if self.amount.clone().apply(current_amount).is_none() {
                return Err(DomainError::validation(AMOUNT_REQUIRED));
            }
            if switching || self.quantity.is_present() {
                self.quantity = Patch::Clear;
            }
            if switching || self.unit.is_present() {
                self.unit = Patch::Clear;
            }
        } else {
            if self.quantity.clone().apply(current_quantity).is_none() {
                return Err(DomainError::validation(QUANTITY_REQUIRED));
            }
            if switching || self.amount.is_present() {
                self.amount = Patch::Clear;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DistributionFilter {
    pub client_id: Option<i64>,
    pub assistance_type: Option<AssistanceType>,
    pub status: Option<DistributionStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Case-insensitive substring of client name, client phone or description
    pub search: Option<String>,
}

/// Counts by status plus provided totals by type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionStats {
    pub total_distributions: i64,
    pub provided_count: i64,
    pub pending_count: i64,
    pub cancelled_count: i64,
    pub total_money_distributed: Decimal,
    pub total_medicine_distributed: i64,
    pub total_equipment_distributed: i64,
}
