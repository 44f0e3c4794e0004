//! Profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// An account profile in the RecruitFlow system.
///
/// The gate reads profiles and never writes them. `role` is the sole
/// source of truth for authorization once the row exists;
/// `onboarding_completed` flips false to true exactly once, set by the
/// onboarding flow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Auth-provider user identifier (primary key).
    pub id: Uuid,
    /// Account role.
    pub role: Role,
    /// Whether the one-time onboarding workflow has completed.
    pub onboarding_completed: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Whether protected role-scoped paths are reachable for this profile.
    pub fn is_active(&self) -> bool {
        self.onboarding_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role, onboarding_completed: bool) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            role,
            onboarding_completed,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_active_tracks_onboarding() {
        assert!(profile(Role::Applicant, true).is_active());
        assert!(!profile(Role::Applicant, false).is_active());
    }
}
