//! Shared application state threaded through every route.

use std::sync::Arc;

use recruitflow_auth::identity::IdentityResolver;
use recruitflow_auth::profile::ProfileLookup;
use recruitflow_core::config::AppConfig;

/// Application state available to the gate middleware and all handlers.
///
/// The identity resolver and profile lookup are trait objects so tests can
/// substitute in-memory fakes without a token provider or database.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Resolves request credentials to an identity, or anonymous.
    pub identity_resolver: Arc<dyn IdentityResolver>,
    /// Read-only profile access (usually the cached Postgres lookup).
    pub profile_lookup: Arc<dyn ProfileLookup>,
}

impl AppState {
    /// Create the application state.
    pub fn new(
        config: Arc<AppConfig>,
        identity_resolver: Arc<dyn IdentityResolver>,
        profile_lookup: Arc<dyn ProfileLookup>,
    ) -> Self {
        Self {
            config,
            identity_resolver,
            profile_lookup,
        }
    }
}
