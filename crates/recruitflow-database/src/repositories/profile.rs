//! Profile repository implementation.
//!
//! The gate only ever reads profiles; writes belong to the onboarding and
//! account subsystems, which share this repository.

use sqlx::PgPool;
use uuid::Uuid;

use recruitflow_core::error::{AppError, ErrorKind};
use recruitflow_core::result::AppResult;
use recruitflow_entity::profile::{Profile, Role};

/// Repository for profile reads and onboarding-flow writes.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a profile by the auth-provider user id.
    ///
    /// `Ok(None)` means no profile row exists yet, which is a legitimate
    /// mid-registration state and distinct from a database error.
    pub async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find profile by user id", e)
            })
    }

    /// Create a profile row for a freshly-registered account.
    pub async fn create(&self, user_id: Uuid, role: Role) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (id, role, onboarding_completed) \
             VALUES ($1, $2, FALSE) RETURNING *",
        )
        .bind(user_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create profile", e))
    }

    /// Mark onboarding complete. One-way: the flag is never reverted.
    pub async fn complete_onboarding(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET onboarding_completed = TRUE, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to complete onboarding", e)
        })
    }
}
