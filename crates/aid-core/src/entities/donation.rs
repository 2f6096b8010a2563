//! Donation entity - a monetary donation attributed to a donor

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::entities::DonorRef;
use crate::value_objects::{DonationStatus, DonorType, Patch};

/// Donation joined with its donor's contact details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donation {
    pub id: i64,
    pub donor_id: i64,
    pub donor_name: String,
    pub donor_type: DonorType,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub payment_mode: String,
    pub purpose: String,
    pub status: DonationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDonation {
    pub donor: DonorRef,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub payment_mode: String,
    pub purpose: String,
    pub status: DonationStatus,
    pub notes: Option<String>,
}

/// Sparse update to a donation
#[derive(Debug, Clone, Default)]
pub struct DonationChanges {
    /// Reassign to another donor, resolved inside the update transaction
    pub donor: Option<DonorRef>,
    pub amount: Patch<Decimal>,
    pub date: Patch<NaiveDate>,
    pub payment_mode: Patch<String>,
    pub purpose: Patch<String>,
    pub status: Patch<DonationStatus>,
    pub notes: Patch<String>,
}

/// Filters for listing donations
#[derive(Debug, Clone)]
pub struct DonationFilter {
    pub status: Option<DonationStatus>,
    /// Case-insensitive substring of donor name or purpose
    pub search: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub donor_type: Option<DonorType>,
    pub limit: i64,
    pub offset: i64,
}

impl DonationFilter {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 500;

    /// Clamp limit into `1..=MAX_LIMIT` and offset to non-negative
    pub fn with_page(mut self, limit: Option<i64>, offset: Option<i64>) -> Self {
        self.limit = limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT);
        self.offset = offset.unwrap_or(0).max(0);
        self
    }
}

impl Default for DonationFilter {
    fn default() -> Self {
        Self {
            status: None,
            search: None,
            start_date: None,
            end_date: None,
            donor_type: None,
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Totals over completed donations plus status counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationStats {
    pub total_amount: Decimal,
    pub total_count: i64,
    pub completed_count: i64,
    pub pending_count: i64,
    /// Completed amount within the requested month
    pub monthly_amount: Decimal,
}
