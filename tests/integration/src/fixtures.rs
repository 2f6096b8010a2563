//! Request bodies with unique identifying fields

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::helpers::{assert_data, TestServer};

static COUNTER: AtomicU64 = AtomicU64::new(1);

// Run-specific base so reruns against the same database do not collide.
static RUN_BASE: LazyLock<u64> = LazyLock::new(|| {
    let nanos = chrono::Utc::now().timestamp_micros().unsigned_abs();
    (nanos % 1_000_000) * 1_000_000
});

/// Unique across tests and across runs
pub fn unique_suffix() -> u64 {
    *RUN_BASE + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A 12-digit national id that no other fixture uses
pub fn unique_aadhaar() -> String {
    format!("9{:011}", unique_suffix() % 100_000_000_000)
}

pub fn register_body() -> Value {
    let suffix = unique_suffix();
    json!({
        "name": format!("Admin {suffix}"),
        "email": format!("admin{suffix}@example.org"),
        "password": "Str0ngPass!",
    })
}

/// Register a fresh operator and return its bearer token
pub async fn admin_token(server: &TestServer) -> Result<String> {
    let response = server.post("/api/v1/auth/register", &register_body()).await?;
    let data = assert_data(response, StatusCode::CREATED).await?;
    data["token"]
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| anyhow::anyhow!("No token in {data}"))
}

pub fn member_body() -> Value {
    let suffix = unique_suffix();
    json!({
        "name": format!("Member {suffix}"),
        "email": format!("member{suffix}@example.org"),
        "join_date": "2024-01-01",
    })
}

pub fn client_body() -> Value {
    let suffix = unique_suffix();
    json!({
        "name": format!("Client {suffix}"),
        "address": "12 Temple Road",
        "city": "Pune",
        "state": "Maharashtra",
        "zip": "411001",
        "aadhaar": unique_aadhaar(),
    })
}

pub fn donation_body(donor_name: &str) -> Value {
    json!({
        "donor_name": donor_name,
        "amount": 1500,
        "date": "2024-03-15",
        "payment_mode": "UPI",
        "purpose": "General fund",
    })
}

pub fn medicine_body(donor_name: &str) -> Value {
    json!({
        "donor_name": donor_name,
        "item_name": "Paracetamol",
        "category": "Medicine",
        "strength": "500mg",
        "quantity": 20,
        "expiry_date": "2030-01-01",
    })
}

pub fn money_distribution_body(client_id: i64) -> Value {
    json!({
        "client_id": client_id,
        "assistance_type": "money",
        "amount": 2500,
        "assistance_date": "2024-04-01",
    })
}

/// Unique donor name for find-or-create tests
pub fn donor_name() -> String {
    format!("Donor {}", unique_suffix())
}
