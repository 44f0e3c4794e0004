//! Route definitions for the RecruitFlow HTTP surface.
//!
//! All routes sit behind the authorization gate; the router only decides
//! which handler an allowed request reaches.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::get,
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and the gate.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(applicant_routes())
        .merge(org_routes())
        .merge(admin_routes())
        .merge(setup_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::authorization_gate,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Marketing site, auth flow, legal pages, and read-only job content.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::landing))
        .route("/login", get(handlers::pages::login))
        .route("/register", get(handlers::pages::register))
        .route("/auth/callback", get(handlers::pages::auth_callback))
        .route("/jobs", get(handlers::pages::job_list))
        .route("/jobs/{id}", get(handlers::pages::job_detail))
        .route("/about", get(handlers::pages::static_page))
        .route("/pricing", get(handlers::pages::static_page))
        .route("/terms", get(handlers::pages::static_page))
        .route("/privacy", get(handlers::pages::static_page))
        .route("/health", get(handlers::health::health))
}

/// Applicant dashboard tree.
fn applicant_routes() -> Router<AppState> {
    Router::new()
        .route("/app/applicant", get(handlers::dashboard::applicant))
        .route(
            "/app/applicant/profile",
            get(handlers::dashboard::applicant_profile),
        )
}

/// Organization trees: employer and recruiter dashboards.
fn org_routes() -> Router<AppState> {
    Router::new()
        .route("/app/org/employer", get(handlers::dashboard::employer))
        .route("/app/org/recruiter", get(handlers::dashboard::recruiter))
}

/// Admin dashboard tree.
fn admin_routes() -> Router<AppState> {
    Router::new().route("/app/admin", get(handlers::dashboard::admin))
}

/// Onboarding funnels.
fn setup_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/app/setup/applicant",
            get(handlers::setup::applicant_setup),
        )
        .route("/app/setup/admin", get(handlers::setup::admin_setup))
        .route("/app/org/select", get(handlers::setup::role_selection))
}
