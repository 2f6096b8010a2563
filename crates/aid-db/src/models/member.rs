//! Life member database model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// A `life_members` row joined with its `donors` row
///
/// `created_at` and `updated_at` come from the membership row.
#[derive(Debug, Clone, FromRow)]
pub struct LifeMemberModel {
    pub id: i64,
    pub donor_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub donor_status: String,
    pub aadhar_number: Option<String>,
    pub join_date: NaiveDate,
    pub join_time: NaiveTime,
    pub membership_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
