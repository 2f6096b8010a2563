//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in aid-core.
//! Each repository handles database operations for a specific domain entity.

pub(crate) mod error;

mod client;
mod distribution;
mod donation;
mod donor;
mod medical_donation;
mod member;
mod user;

pub use client::PgClientRepository;
pub use distribution::PgDistributionRepository;
pub use donation::PgDonationRepository;
pub use donor::PgDonorRepository;
pub use medical_donation::PgMedicalDonationRepository;
pub use member::PgMemberRepository;
pub use user::PgUserRepository;
