//! End-to-end test utilities for the aid administration API
//!
//! Tests spin up the real router on an ephemeral port against the database
//! named by `DATABASE_URL` and talk to it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
