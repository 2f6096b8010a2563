//! Medical donation database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct MedicalDonationModel {
    pub id: i64,
    pub donor_id: i64,
    pub donor_name: String,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub item_name: String,
    pub category: String,
    pub strength: Option<String>,
    pub quantity: i32,
    pub expiry_date: Option<NaiveDate>,
    pub status: String,
    pub donation_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct MedicalDonationStatsModel {
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
