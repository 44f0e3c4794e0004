//! Public pages: marketing site, auth flow, and read-only job content.

use axum::Json;
use axum::extract::Path;
use axum::http::Uri;
use serde_json::{Value, json};

/// Marketing landing page.
pub async fn landing() -> Json<Value> {
    Json(json!({ "page": "landing" }))
}

/// Login page (token issuance happens at the external auth provider).
pub async fn login() -> Json<Value> {
    Json(json!({ "page": "login" }))
}

/// Registration page.
pub async fn register() -> Json<Value> {
    Json(json!({ "page": "register" }))
}

/// Auth provider callback landing.
pub async fn auth_callback() -> Json<Value> {
    Json(json!({ "page": "auth_callback" }))
}

/// Public job listing.
pub async fn job_list() -> Json<Value> {
    Json(json!({ "page": "jobs" }))
}

/// Public job detail.
pub async fn job_detail(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "page": "job", "id": id }))
}

/// Static marketing/legal page (about, pricing, terms, privacy).
pub async fn static_page(uri: Uri) -> Json<Value> {
    Json(json!({ "page": uri.path().trim_start_matches('/') }))
}
