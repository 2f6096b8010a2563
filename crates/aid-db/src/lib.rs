//! # aid-db
//!
//! Database layer implementing the aid-core repository traits with
//! PostgreSQL via SQLx.
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - Repository implementations, including the two-table life member writer
//! - [`UpdateBuilder`] for partial updates
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aid_common::AppConfig;
//! use aid_core::traits::ClientRepository;
//! use aid_db::{create_pool, run_migrations, PgClientRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     run_migrations(&pool).await?;
//!     let clients = PgClientRepository::new(pool);
//!     let client = clients.find_by_id(1).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod update_builder;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{
    PgClientRepository, PgDistributionRepository, PgDonationRepository, PgDonorRepository,
    PgMedicalDonationRepository, PgMemberRepository, PgUserRepository,
};
pub use update_builder::{FieldValue, IntoFieldValue, UpdateBuilder};
