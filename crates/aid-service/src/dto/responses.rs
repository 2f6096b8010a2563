//! Response DTOs for API endpoints
//!
//! Field names follow the stored column names; the two creation receipts and
//! the donation statistics use camelCase keys.

use aid_core::{
    ActivityStatus, AssistanceType, ClientStatus, DistributionStatus, DonationStatus, DonorType,
    Gender, MedicalCategory, MedicalDonationStatus,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Operator account, without credentials
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Issued bearer token plus the account it belongs to
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

// ============================================================================
// Creation receipt
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreatedResponse {
    pub member_id: i64,
    pub donor_id: i64,
}

// ============================================================================
// Entity Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DonorResponse {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub donor_type: DonorType,
    pub status: ActivityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub donor_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub aadhar_number: Option<String>,
    pub join_date: NaiveDate,
    pub join_time: NaiveTime,
    pub membership_status: ActivityStatus,
    pub donor_status: ActivityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientResponse {
    pub id: i64,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub aadhaar: String,
    pub status: ClientStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Donation joined with its donor
#[derive(Debug, Clone, Serialize)]
pub struct DonationResponse {
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

#[derive(Debug, Clone, Serialize)]
pub struct MedicalDonationResponse {
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

/// Distribution joined with the receiving client
#[derive(Debug, Clone, Serialize)]
pub struct DistributionResponse {
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

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now(),
        }
    }
}

/// Readiness: the database is the only dependency
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn from_database(healthy: bool) -> Self {
        Self {
            status: if healthy { "ready" } else { "not_ready" },
            timestamp: Utc::now(),
            database: if healthy { "healthy" } else { "unhealthy" },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

// ============================================================================
// Statistics
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStatsResponse {
    pub total_amount: Decimal,
    pub total_count: i64,
    pub completed_count: i64,
    pub pending_count: i64,
    pub monthly_amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MedicalDonationStatsResponse {
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

#[derive(Debug, Clone, Serialize)]
pub struct DistributionStatsResponse {
    pub total_distributions: i64,
    pub provided_count: i64,
    pub pending_count: i64,
    pub cancelled_count: i64,
    pub total_money_distributed: Decimal,
    pub total_medicine_distributed: i64,
    pub total_equipment_distributed: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_receipt_is_camel_case() {
        let json = serde_json::to_value(MemberCreatedResponse {
            member_id: 7,
            donor_id: 12,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"memberId": 7, "donorId": 12}));
    }

    #[test]
    fn test_donation_stats_keys() {
        let json = serde_json::to_value(DonationStatsResponse {
            total_amount: Decimal::new(1500, 0),
            total_count: 3,
            completed_count: 2,
            pending_count: 1,
            monthly_amount: Decimal::ZERO,
        })
        .unwrap();
        assert!(json.get("totalAmount").is_some());
        assert!(json.get("monthlyAmount").is_some());
        assert_eq!(json["completedCount"], 2);
    }

    #[test]
    fn test_readiness_reflects_database() {
        let ready = ReadinessResponse::from_database(true);
        assert!(ready.is_ready());
        assert_eq!(ready.database, "healthy");

        let down = ReadinessResponse::from_database(false);
        assert!(!down.is_ready());
        assert_eq!(down.status, "not_ready");
    }
}
