//! Profile lookup contract.

use async_trait::async_trait;
use uuid::Uuid;

use recruitflow_core::result::AppResult;
use recruitflow_entity::profile::Profile;

/// Read-only profile access for the gate.
///
/// `Ok(None)` is a legitimate state: the identity exists in the external
/// auth provider but no profile row has been created yet (mid-registration).
/// It must be handled distinctly from `Err`, which signals a transport or
/// database failure and makes the gate fail closed.
///
/// The gate never retries a failed lookup; if an implementation wants
/// retry or backoff, that is its own concern.
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    /// Fetch the profile for an auth-provider user id.
    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>>;
}
