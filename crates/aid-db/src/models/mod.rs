//! Database models - SQLx-compatible structs for PostgreSQL rows
//!
//! Enum-valued columns are read as text and parsed by the mappers.

mod client;
mod distribution;
mod donation;
mod donor;
mod medical_donation;
mod member;
mod user;

pub use client::ClientModel;
pub use distribution::{DistributionModel, DistributionStatsModel};
pub use donation::{DonationModel, DonationStatsModel};
pub use donor::DonorModel;
pub use medical_donation::{MedicalDonationModel, MedicalDonationStatsModel};
pub use member::LifeMemberModel;
pub use user::UserModel;
