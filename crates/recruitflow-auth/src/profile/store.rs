//! Postgres-backed profile lookup.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use recruitflow_core::result::AppResult;
use recruitflow_database::repositories::profile::ProfileRepository;
use recruitflow_entity::profile::Profile;

use super::lookup::ProfileLookup;

/// Profile lookup over the Postgres repository.
#[derive(Debug, Clone)]
pub struct PgProfileLookup {
    repo: Arc<ProfileRepository>,
}

impl PgProfileLookup {
    /// Create a lookup over an existing repository.
    pub fn new(repo: Arc<ProfileRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProfileLookup for PgProfileLookup {
    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        self.repo.find_by_user_id(user_id).await
    }
}
