//! `AuthUser` extractor, reading the identity context injected by the gate.
//!
//! The gate decides path-level access before any handler runs, so this
//! extractor never re-validates credentials; it only surfaces what the
//! gate already established.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use recruitflow_core::error::AppError;

use crate::middleware::gate::GateContext;
use crate::state::AppState;

/// Extracted authenticated caller context available in handlers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub GateContext);

impl std::ops::Deref for AuthUser {
    type Target = GateContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<GateContext>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| AppError::authentication("No authenticated identity on this request"))
    }
}
