//! Domain entities - core business objects

mod client;
mod distribution;
mod donation;
mod donor;
mod medical_donation;
mod member;
mod user;

pub use client::{Client, ClientChanges, ClientFilter, NewClient};
pub use distribution::{
    Distribution, DistributionChanges, DistributionFilter, DistributionStats, NewDistribution,
};
pub use donation::{Donation, DonationChanges, DonationFilter, DonationStats, NewDonation};
pub use donor::{Donor, DonorFilter, DonorRef};
pub use medical_donation::{
    MedicalDonation, MedicalDonationChanges, MedicalDonationStats, NewMedicalDonation,
};
pub use member::{LifeMember, MemberChanges, MemberFilter, NewLifeMember};
pub use user::User;
