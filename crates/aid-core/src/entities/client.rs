//! Client entity - a beneficiary receiving aid

use chrono::{DateTime, Utc};

use crate::value_objects::{ClientStatus, Gender, Patch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// National ID, fixed at creation
    pub aadhaar: String,
    pub status: ClientStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewClient {
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
}

/// Sparse update to a client. The Aadhaar number has no field here.
#[derive(Debug, Clone, Default)]
pub struct ClientChanges {
    pub name: Patch<String>,
    pub age: Patch<i32>,
    pub gender: Patch<Gender>,
    pub phone: Patch<String>,
    pub address: Patch<String>,
    pub city: Patch<String>,
    pub state: Patch<String>,
    pub zip: Patch<String>,
    pub status: Patch<ClientStatus>,
    pub notes: Patch<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    /// Case-insensitive substring of name, city or address
    pub search: Option<String>,
    pub status: Option<ClientStatus>,
}
