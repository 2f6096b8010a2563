//! Route handlers, one module per resource

pub mod auth;
pub mod clients;
pub mod distributions;
pub mod donations;
pub mod donors;
pub mod health;
pub mod medical_donations;
pub mod members;
