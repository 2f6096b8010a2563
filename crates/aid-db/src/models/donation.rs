//! Donation database models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A `donations` row joined with its donor's name, type and contact details
#[derive(Debug, Clone, FromRow)]
pub struct DonationModel {
    pub id: i64,
    pub donor_id: i64,
    pub donor_name: String,
    pub donor_type: String,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub payment_mode: String,
    pub purpose: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate row for donation statistics
#[derive(Debug, Clone, FromRow)]
pub struct DonationStatsModel {
    pub total_amount: Decimal,
    pub total_count: i64,
    pub completed_count: i64,
    pub pending_count: i64,
    pub monthly_amount: Decimal,
}
