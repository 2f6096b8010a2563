//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Update methods take a change-set of
//! [`Patch`](crate::value_objects::Patch) fields and write only what was
//! supplied; they return `NothingToUpdate` when the change-set is empty.

use async_trait::async_trait;

use crate::entities::{
    Client, ClientChanges, ClientFilter, Distribution, DistributionChanges, DistributionFilter,
    DistributionStats, Donation, DonationChanges, DonationFilter, DonationStats, Donor,
    DonorFilter, LifeMember, MedicalDonation, MedicalDonationChanges, MedicalDonationStats,
    MemberChanges, MemberFilter, NewClient, NewDistribution, NewDonation, NewLifeMember,
    NewMedicalDonation, User,
};
use crate::error::DomainError;
use crate::value_objects::MedicalDonationStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user; a taken email yields `UserAlreadyExists`
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Donor Repository
// ============================================================================

#[async_trait]
pub trait DonorRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Donor>>;

    /// List donors, newest first
    async fn find_all(&self, filter: &DonorFilter) -> RepoResult<Vec<Donor>>;
}

// ============================================================================
// Member Repository (composite: donors + life_members)
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find life member by membership ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<LifeMember>>;

    /// List life members, latest join date first
    async fn find_all(&self, filter: &MemberFilter) -> RepoResult<Vec<LifeMember>>;

    /// Resolve the donor that owns a membership
    async fn donor_id_of(&self, member_id: i64) -> RepoResult<Option<i64>>;

    /// Insert donor and membership atomically, returning `(member_id, donor_id)`
    async fn create(&self, member: &NewLifeMember) -> RepoResult<(i64, i64)>;

    /// Update either or both halves atomically
    async fn update(&self, id: i64, changes: &MemberChanges) -> RepoResult<()>;

    /// Mark both halves inactive atomically
    async fn deactivate(&self, id: i64) -> RepoResult<()>;

    /// Delete the donor; the membership goes with it
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Client Repository
// ============================================================================

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Client>>;

    async fn find_all(&self, filter: &ClientFilter) -> RepoResult<Vec<Client>>;

    /// Insert a client; a taken Aadhaar yields `ClientAadhaarExists`
    async fn create(&self, client: &NewClient) -> RepoResult<i64>;

    /// Partial update; refused once the client is Dead
    async fn update(&self, id: i64, changes: ClientChanges) -> RepoResult<()>;

    /// Set status to Inactive; refused once the client is Dead
    async fn deactivate(&self, id: i64) -> RepoResult<()>;

    /// Hard delete, allowed in every status
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Donation Repository
// ============================================================================

#[async_trait]
pub trait DonationRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Donation>>;

    async fn find_all(&self, filter: &DonationFilter) -> RepoResult<Vec<Donation>>;

    async fn find_by_donor(&self, donor_id: i64) -> RepoResult<Vec<Donation>>;

    /// Resolve the donor and insert the donation in one transaction
    async fn create(&self, donation: &NewDonation) -> RepoResult<i64>;

    async fn update(&self, id: i64, changes: DonationChanges) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Totals, with the monthly figure for `month` of `year`
    async fn stats(&self, month: u32, year: i32) -> RepoResult<DonationStats>;
}

// ============================================================================
// Medical Donation Repository
// ============================================================================

#[async_trait]
pub trait MedicalDonationRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MedicalDonation>>;

    async fn find_all(&self) -> RepoResult<Vec<MedicalDonation>>;

    async fn find_by_status(&self, status: MedicalDonationStatus)
        -> RepoResult<Vec<MedicalDonation>>;

    async fn find_by_donor(&self, donor_id: i64) -> RepoResult<Vec<MedicalDonation>>;

    /// Open donations expiring within `days` days from today
    async fn find_expiring(&self, days: i32) -> RepoResult<Vec<MedicalDonation>>;

    /// Open donations already past expiry
    async fn find_expired(&self) -> RepoResult<Vec<MedicalDonation>>;

    async fn create(&self, donation: &NewMedicalDonation) -> RepoResult<i64>;

    async fn update(&self, id: i64, changes: MedicalDonationChanges) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn stats(&self) -> RepoResult<MedicalDonationStats>;
}

// ============================================================================
// Distribution Repository
// ============================================================================

#[async_trait]
pub trait DistributionRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Distribution>>;

    async fn find_all(&self, filter: &DistributionFilter) -> RepoResult<Vec<Distribution>>;

    async fn find_by_client(&self, client_id: i64) -> RepoResult<Vec<Distribution>>;

    /// Insert a distribution; an unknown client yields `ClientNotFound`
    async fn create(&self, distribution: &NewDistribution) -> RepoResult<i64>;

    async fn update(&self, id: i64, changes: DistributionChanges) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn stats(&self) -> RepoResult<DistributionStats>;
}
