//! # aid-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, ClientService, DistributionService, DonationService, DonorService,
    MedicalDonationService, MemberService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
