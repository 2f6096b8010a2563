//! Medical donation - medicines, supplements and equipment given in kind

use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::DonorRef;
use crate::error::DomainError;
use crate::value_objects::{MedicalCategory, MedicalDonationStatus, Patch};

const STRENGTH_REQUIRED: &str = "Strength is required for Medicine and Supplement categories";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalDonation {
    pub id: i64,
    pub donor_id: i64,
    pub donor_name: String,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub item_name: String,
    pub category: MedicalCategory,
    pub strength: Option<String>,
    pub quantity: i32,
    pub expiry_date: Option<NaiveDate>,
    pub status: MedicalDonationStatus,
    pub donation_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MedicalDonation {
    /// Expiry date has passed
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|d| d < today)
    }
}

#[derive(Debug, Clone)]
pub struct NewMedicalDonation {
    pub donor: DonorRef,
    pub item_name: String,
    pub category: MedicalCategory,
    pub strength: Option<String>,
    pub quantity: i32,
    pub expiry_date: Option<NaiveDate>,
    pub status: MedicalDonationStatus,
}

impl NewMedicalDonation {
    /// Apply category rules: equipment drops strength and expiry, the other
    /// categories must carry a strength.
    pub fn normalized(mut self) -> Result<Self, DomainError> {
        if self.category.is_equipment() {
            self.strength = None;
            self.expiry_date = None;
        } else if self.strength.as_deref().map_or(true, |s| s.trim().is_empty()) {
            return Err(DomainError::validation(STRENGTH_REQUIRED));
        }
        Ok(self)
    }
}

/// Sparse update to a medical donation
#[derive(Debug, Clone, Default)]
pub struct MedicalDonationChanges {
    pub donor: Option<DonorRef>,
    pub item_name: Patch<String>,
    pub category: Patch<MedicalCategory>,
    pub strength: Patch<String>,
    pub quantity: Patch<i32>,
    pub expiry_date: Patch<NaiveDate>,
    pub status: Patch<MedicalDonationStatus>,
}

impl MedicalDonationChanges {
    /// Status-only change
    pub fn status_only(status: MedicalDonationStatus) -> Self {
        Self {
            status: Patch::Set(status),
            ..Default::default()
        }
    }

    /// Re-check category rules against the stored row.
    ///
    /// Only runs when category, strength or expiry is part of the change so
    /// that unrelated edits never fail on old rows.
    pub fn reconcile(
        &mut self,
        current_category: MedicalCategory,
        current_strength: Option<&str>,
    ) -> Result<(), DomainError> {
        if !(self.category.is_present()
            || self.strength.is_present()
            || self.expiry_date.is_present())
        {
            return Ok(());
        }

        let category = self.category.value().copied().unwrap_or(current_category);
        if category.is_equipment() {
            self.strength = Patch::Clear;
            self.expiry_date = Patch::Clear;
            return Ok(());
        }

        let strength = match &self.strength {
            Patch::Unchanged => current_strength,
            Patch::Clear => None,
            Patch::Set(s) => Some(s.as_str()),
        };
        if strength.map_or(true, |s| s.trim().is_empty()) {
            return Err(DomainError::validation(STRENGTH_REQUIRED));
        }
        Ok(())
    }
}

/// Counts over all medical donations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicalDonationStats {
    pub total_donations: i64,
    pub total_quantity: i64,
    pub unique_donors: i64,
    pub pending_count: i64,
    pub approved_count: i64,
    pub collected_count: i64,
    pub rejected_count: i64,
    pub expired_count: i64,
    pub expiring_soon_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(category: MedicalCategory, strength: Option<&str>) -> NewMedicalDonation {
        NewMedicalDonation {
            donor: DonorRef::Name("Asha".to_string()),
            item_name: "Paracetamol".to_string(),
            category,
            strength: strength.map(str::to_string),
            quantity: 10,
            expiry_date: NaiveDate::from_ymd_opt(2027, 1, 1),
            status: MedicalDonationStatus::Pending,
        }
    }

    #[test]
    fn test_equipment_drops_strength_and_expiry() {
        let item = new_item(MedicalCategory::Equipment, Some("500mg"))
            .normalized()
            .unwrap();
        assert_eq!(item.strength, None);
        assert_eq!(item.expiry_date, None);
    }

    #[test]
    fn test_medicine_requires_strength() {
        let err = new_item(MedicalCategory::Medicine, None)
            .normalized()
            .unwrap_err();
        assert_eq!(err.to_string(), STRENGTH_REQUIRED);
        assert!(new_item(MedicalCategory::Supplement, Some(" "))
            .normalized()
            .is_err());
        assert!(new_item(MedicalCategory::Medicine, Some("500mg"))
            .normalized()
            .is_ok());
    }

    #[test]
    fn test_reconcile_switch_to_equipment_clears() {
        let mut changes = MedicalDonationChanges {
            category: Patch::Set(MedicalCategory::Equipment),
            ..Default::default()
        };
        changes
            .reconcile(MedicalCategory::Medicine, Some("500mg"))
            .unwrap();
        assert_eq!(changes.strength, Patch::Clear);
        assert_eq!(changes.expiry_date, Patch::Clear);
    }

    #[test]
    fn test_reconcile_switch_to_medicine_needs_strength() {
        let mut changes = MedicalDonationChanges {
            category: Patch::Set(MedicalCategory::Medicine),
            ..Default::default()
        };
        assert!(changes.reconcile(MedicalCategory::Equipment, None).is_err());

        let mut changes = MedicalDonationChanges {
            strength: Patch::Clear,
            ..Default::default()
        };
        assert!(changes
            .reconcile(MedicalCategory::Supplement, Some("1g"))
            .is_err());
    }

    #[test]
    fn test_reconcile_ignores_unrelated_fields() {
        let mut changes = MedicalDonationChanges {
            quantity: Patch::Set(3),
            ..Default::default()
        };
        assert!(changes.reconcile(MedicalCategory::Medicine, None).is_ok());
        assert!(changes.strength.is_unchanged());
    }
}
