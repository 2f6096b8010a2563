//! Distribution database models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A `distributions` row joined with the receiving client's contact details
#[derive(Debug, Clone, FromRow)]
pub struct DistributionModel {
    pub id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub client_address: String,
    pub client_city: String,
    pub client_state: String,
    pub assistance_type: String,
    pub amount: Option<Decimal>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub assistance_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct DistributionStatsModel {
    pub total_distributions: i64,
    pub provided_count: i64,
    pub pending_count: i64,
    pub cancelled_count: i64,
    pub total_money_distributed: Decimal,
    pub total_medicine_distributed: i64,
    pub total_equipment_distributed: i64,
}
