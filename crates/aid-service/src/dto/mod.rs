//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs and their conversion into domain inputs
//! - Query-string DTOs for list endpoints
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod queries;
pub mod requests;
pub mod responses;

pub use queries::{
    ClientQuery, DistributionQuery, DonationQuery, DonorQuery, ExpiringQuery, MemberQuery,
    StatsQuery,
};

pub use requests::{
    CreateClientRequest, CreateDistributionRequest, CreateDonationRequest,
    CreateMedicalDonationRequest, CreateMemberRequest, LoginRequest, RegisterRequest,
    StatusRequest, UpdateClientRequest, UpdateDistributionRequest, UpdateDonationRequest,
    UpdateMedicalDonationRequest, UpdateMemberRequest,
};

pub use responses::{
    AuthResponse, ClientResponse, DistributionResponse,
    DistributionStatsResponse, DonationResponse, DonationStatsResponse, DonorResponse,
    HealthResponse, MedicalDonationResponse, MedicalDonationStatsResponse, MemberCreatedResponse,
    MemberResponse, ReadinessResponse, UserResponse,
};

pub use mappers::map_all;
