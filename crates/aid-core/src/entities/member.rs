//! Life member - a donor row joined with its membership row
//!
//! A life member is stored across two tables: `donors` holds identity and
//! contact details, `life_members` holds the membership itself. The two halves
//! are always written together in one transaction.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::value_objects::{ActivityStatus, Patch};

/// Joined view of a life member and its donor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeMember {
    pub id: i64,
    pub donor_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub donor_status: ActivityStatus,
    pub aadhar_number: Option<String>,
    pub join_date: NaiveDate,
    pub join_time: NaiveTime,
    pub membership_status: ActivityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LifeMember {
    /// Both halves are active
    pub fn is_active(&self) -> bool {
        self.donor_status == ActivityStatus::Active
            && self.membership_status == ActivityStatus::Active
    }
}

/// Input for creating a donor and its membership together
#[derive(Debug, Clone)]
pub struct NewLifeMember {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub aadhar_number: Option<String>,
    pub join_date: NaiveDate,
    /// Defaults to the current wall-clock time when absent
    pub join_time: Option<NaiveTime>,
}

/// Sparse update to a life member; fields left `Unchanged` are not written
///
/// The first four fields live on the donor row, `membership_status` on the
/// membership row. Aadhar number and join date/time are fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct MemberChanges {
    pub name: Patch<String>,
    pub email: Patch<String>,
    pub phone: Patch<String>,
    pub address: Patch<String>,
    pub membership_status: Patch<ActivityStatus>,
}

impl MemberChanges {
    /// True if any donor-side field was supplied
    pub fn touches_donor(&self) -> bool {
        self.name.is_present()
            || self.email.is_present()
            || self.phone.is_present()
            || self.address.is_present()
    }

    /// True if the membership row is touched
    pub fn touches_membership(&self) -> bool {
        self.membership_status.is_present()
    }

    pub fn is_empty(&self) -> bool {
        !self.touches_donor() && !self.touches_membership()
    }
}

/// Filters for listing life members
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    /// Case-insensitive substring of name, email, phone or aadhar number
    pub search: Option<String>,
    pub status: Option<ActivityStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_sides() {
        let changes = MemberChanges {
            phone: Patch::Clear,
            ..Default::default()
        };
        assert!(changes.touches_donor());
        assert!(!changes.touches_membership());
        assert!(!changes.is_empty());

        let changes = MemberChanges {
            membership_status: Patch::Set(ActivityStatus::Inactive),
            ..Default::default()
        };
        assert!(!changes.touches_donor());
        assert!(changes.touches_membership());

        assert!(MemberChanges::default().is_empty());
    }
}
