//! # aid-core
//!
//! Domain layer containing entities, value objects, change-sets and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Client, ClientChanges, ClientFilter, Distribution, DistributionChanges, DistributionFilter,
    DistributionStats, Donation, DonationChanges, DonationFilter, DonationStats, Donor,
    DonorFilter, DonorRef, LifeMember, MedicalDonation, MedicalDonationChanges,
    MedicalDonationStats, MemberChanges, MemberFilter, NewClient, NewDistribution, NewDonation,
    NewLifeMember, NewMedicalDonation, User,
};
pub use error::DomainError;
pub use traits::{
    ClientRepository, DistributionRepository, DonationRepository, DonorRepository,
    MedicalDonationRepository, MemberRepository, RepoResult, UserRepository,
};
pub use value_objects::{
    ActivityStatus, AssistanceType, ClientStatus, DistributionStatus, DonationStatus, DonorType,
    Gender, MedicalCategory, MedicalDonationStatus, Patch, StatusTransition,
};
