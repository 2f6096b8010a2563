//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`], turns request DTOs
//! into domain inputs, calls the repositories and maps results back to
//! response DTOs.

pub mod auth;
pub mod client;
pub mod context;
pub mod distribution;
pub mod donation;
pub mod donor;
pub mod error;
pub mod medical_donation;
pub mod member;

pub use auth::AuthService;
pub use client::ClientService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use distribution::DistributionService;
pub use donation::DonationService;
pub use donor::DonorService;
pub use error::{ServiceError, ServiceResult};
pub use medical_donation::MedicalDonationService;
pub use member::MemberService;
