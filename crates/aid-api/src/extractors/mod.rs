//! Axum extractors for request handling

mod auth;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use path::ApiPath;
pub use query::ApiQuery;
pub use validated::ValidatedJson;
