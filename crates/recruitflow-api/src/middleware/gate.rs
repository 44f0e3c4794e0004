//! The authorization gate middleware.
//!
//! Sits in front of every route. Classifies the path, resolves the
//! caller's identity, reads the profile, derives the authorization state,
//! and evaluates the decision table. An allowed request proceeds with a
//! [`GateContext`] extension attached; everything else becomes a redirect.
//!
//! The gate's output is total: Allow or Redirect, never an error
//! response. A profile lookup failure is logged and collapses into the
//! deny state, so the caller only ever sees a login prompt.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use uuid::Uuid;

use recruitflow_auth::engine::{self, AuthState, Decision, LookupOutcome};
use recruitflow_auth::identity::IdentityOutcome;
use recruitflow_auth::paths::classify;
use recruitflow_entity::profile::Role;

use crate::state::AppState;

/// Identity context injected into allowed requests.
///
/// Downstream handlers may assume the gate has already authorized the
/// caller for this path's role scope; only finer per-resource checks
/// remain their responsibility.
#[derive(Debug, Clone, Copy)]
pub struct GateContext {
    /// Auth-provider user ID.
    pub user_id: Uuid,
    /// The caller's role.
    pub role: Role,
}

/// Decide every inbound request before any handler runs.
pub async fn authorization_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let original = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| path.clone());

    let class = classify(&path);
    let identity = state.identity_resolver.resolve(request.headers());

    let lookup = match &identity {
        IdentityOutcome::Anonymous => LookupOutcome::NotFound,
        IdentityOutcome::Authenticated(id) => {
            match state.profile_lookup.find_profile(id.user_id).await {
                Ok(Some(profile)) => LookupOutcome::Found(profile),
                Ok(None) => LookupOutcome::NotFound,
                Err(e) => {
                    tracing::error!(
                        user_id = %id.user_id,
                        error = %e,
                        "Profile lookup failed, failing closed"
                    );
                    LookupOutcome::Failed
                }
            }
        }
    };

    let auth_state = engine::derive_state(&identity, lookup);

    match engine::evaluate(auth_state, class, &original) {
        Decision::Allow => {
            if let (IdentityOutcome::Authenticated(id), Some(role)) =
                (&identity, role_of(auth_state))
            {
                request.extensions_mut().insert(GateContext {
                    user_id: id.user_id,
                    role,
                });
            }
            next.run(request).await
        }
        Decision::Redirect { target, reason } => {
            tracing::debug!(
                path = %path,
                target = %target,
                reason = ?reason,
                state = ?auth_state,
                "Gate redirect"
            );
            Redirect::temporary(&target).into_response()
        }
    }
}

/// The role carried by an authorization state, if it has one.
fn role_of(state: AuthState) -> Option<Role> {
    match state {
        AuthState::Active(role) | AuthState::Onboarding(role) => Some(role),
        AuthState::Anonymous | AuthState::NoProfile => None,
    }
}
