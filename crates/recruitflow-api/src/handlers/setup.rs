//! Onboarding funnel pages.

use axum::Json;
use serde_json::{Value, json};

use crate::extractors::AuthUser;

/// Applicant onboarding flow.
pub async fn applicant_setup(auth: AuthUser) -> Json<Value> {
    Json(json!({
        "page": "applicant_setup",
        "user_id": auth.user_id,
    }))
}

/// Admin onboarding flow.
pub async fn admin_setup(auth: AuthUser) -> Json<Value> {
    Json(json!({
        "page": "admin_setup",
        "user_id": auth.user_id,
    }))
}

/// Shared employer/recruiter/org role-selection page.
pub async fn role_selection(auth: AuthUser) -> Json<Value> {
    Json(json!({
        "page": "role_selection",
        "user_id": auth.user_id,
        "role": auth.role.as_str(),
    }))
}
