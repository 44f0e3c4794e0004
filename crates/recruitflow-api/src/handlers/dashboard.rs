//! Role dashboard roots.
//!
//! By the time these run, the gate has already verified that the caller
//! is active and in the right role tree.

use axum::Json;
use serde_json::{Value, json};

use crate::extractors::AuthUser;

/// Applicant dashboard root.
pub async fn applicant(auth: AuthUser) -> Json<Value> {
    dashboard_payload("applicant_dashboard", &auth)
}

/// Applicant profile page.
pub async fn applicant_profile(auth: AuthUser) -> Json<Value> {
    dashboard_payload("applicant_profile", &auth)
}

/// Employer dashboard root.
pub async fn employer(auth: AuthUser) -> Json<Value> {
    dashboard_payload("employer_dashboard", &auth)
}

/// Recruiter dashboard root.
pub async fn recruiter(auth: AuthUser) -> Json<Value> {
    dashboard_payload("recruiter_dashboard", &auth)
}

/// Admin dashboard root.
pub async fn admin(auth: AuthUser) -> Json<Value> {
    dashboard_payload("admin_dashboard", &auth)
}

fn dashboard_payload(page: &str, auth: &AuthUser) -> Json<Value> {
    Json(json!({
        "page": page,
        "user_id": auth.user_id,
        "role": auth.role.as_str(),
    }))
}
