//! Session token claims issued by the external auth provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use recruitflow_entity::profile::Role;

/// Claims payload embedded in every session token.
///
/// The `role` claim is set once at account creation and is only a routing
/// hint: it is consulted before a profile row exists, and never grants
/// access to a protected tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the auth-provider user ID.
    pub sub: Uuid,
    /// Role hint chosen at signup, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}
