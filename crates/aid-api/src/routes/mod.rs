//! Route definitions
//!
//! Resource routes are mounted under /api/v1. Everything except
//! register/login sits behind the bearer-token check.

use axum::{
    middleware::from_extractor_with_state,
    routing::{get, patch, post},
    Router,
};

use crate::extractors::AuthUser;
use crate::handlers::{
    auth, clients, distributions, donations, donors, health, medical_donations, members,
};
use crate::state::AppState;

/// API router (health routes are separate so they bypass rate limiting)
pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes(state))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/me", get(auth::me))
        .merge(member_routes())
        .merge(client_routes())
        .merge(donor_routes())
        .merge(donation_routes())
        .merge(medical_donation_routes())
        .merge(distribution_routes())
        .route_layer(from_extractor_with_state::<AuthUser, AppState>(state));

    Router::new().merge(public_auth_routes()).merge(protected)
}

fn public_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/members",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/members/:id",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
        .route("/members/:id/deactivate", patch(members::deactivate_member))
}

fn client_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clients",
            get(clients::list_clients).post(clients::create_client),
        )
        .route(
            "/clients/:id",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        .route("/clients/:id/deactivate", patch(clients::deactivate_client))
}

fn donor_routes() -> Router<AppState> {
    Router::new()
        .route("/donors", get(donors::list_donors))
        .route("/donors/:id", get(donors::get_donor))
}

fn donation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/donations",
            get(donations::list_donations).post(donations::create_donation),
        )
        .route("/donations/stats", get(donations::donation_stats))
        .route(
            "/donations/donor/:donor_id",
            get(donations::donations_by_donor),
        )
        .route(
            "/donations/life-member/:member_id",
            get(donations::donations_by_life_member),
        )
        .route(
            "/donations/:id",
            get(donations::get_donation)
                .put(donations::update_donation)
                .delete(donations::delete_donation),
        )
}

fn medical_donation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/medical-donations",
            get(medical_donations::list_medical_donations)
                .post(medical_donations::create_medical_donation),
        )
        .route(
            "/medical-donations/stats",
            get(medical_donations::medical_donation_stats),
        )
        .route(
            "/medical-donations/expiring",
            get(medical_donations::expiring_medical_donations),
        )
        .route(
            "/medical-donations/expired",
            get(medical_donations::expired_medical_donations),
        )
        .route(
            "/medical-donations/status/:status",
            get(medical_donations::medical_donations_by_status),
        )
        .route(
            "/medical-donations/donor/:donor_id",
            get(medical_donations::medical_donations_by_donor),
        )
        .route(
            "/medical-donations/:id",
            get(medical_donations::get_medical_donation)
                .put(medical_donations::update_medical_donation)
                .delete(medical_donations::delete_medical_donation),
        )
        .route(
            "/medical-donations/:id/status",
            patch(medical_donations::update_medical_donation_status),
        )
}

fn distribution_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/distributions",
            get(distributions::list_distributions).post(distributions::create_distribution),
        )
        .route("/distributions/stats", get(distributions::distribution_stats))
        .route(
            "/distributions/client/:client_id",
            get(distributions::distributions_by_client),
        )
        .route(
            "/distributions/:id",
            get(distributions::get_distribution)
                .put(distributions::update_distribution)
                .delete(distributions::delete_distribution),
        )
        .route(
            "/distributions/:id/status",
            patch(distributions::update_distribution_status),
        )
}
