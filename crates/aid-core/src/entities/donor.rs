//! Donor entity - the identity record behind donations and life memberships

use chrono::{DateTime, Utc};

use crate::value_objects::{ActivityStatus, DonorType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
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

impl Donor {
    /// Check if this donor holds a life membership
    #[inline]
    pub fn is_life_member(&self) -> bool {
        self.donor_type == DonorType::LifeMember
    }
}

/// How a donation names its donor
///
/// `Name` resolves to an existing donor by case-insensitive name, or creates
/// an `Individual` donor when none matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonorRef {
    Id(i64),
    Name(String),
}

impl DonorRef {
    /// Build from the two optional request fields; an id wins over a name
    pub fn from_parts(donor_id: Option<i64>, donor_name: Option<String>) -> Option<Self> {
        match (donor_id, donor_name) {
            (Some(id), _) => Some(Self::Id(id)),
            (None, Some(name)) if !name.trim().is_empty() => {
                Some(Self::Name(name.trim().to_string()))
            }
            _ => None,
        }
    }
}

/// Filters for listing donors
#[derive(Debug, Clone, Default)]
pub struct DonorFilter {
    pub donor_type: Option<DonorType>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donor_ref_prefers_id() {
        assert_eq!(
            DonorRef::from_parts(Some(4), Some("Asha".to_string())),
            Some(DonorRef::Id(4))
        );
        assert_eq!(
            DonorRef::from_parts(None, Some("  Asha ".to_string())),
            Some(DonorRef::Name("Asha".to_string()))
        );
        assert_eq!(DonorRef::from_parts(None, Some("   ".to_string())), None);
        assert_eq!(DonorRef::from_parts(None, None), None);
    }
}
