//! User entity - an operator account of the admin panel

use chrono::{DateTime, Utc};

/// Operator account; the password hash is never loaded into this type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
