//! Profile cache configuration.

use serde::{Deserialize, Serialize};

/// In-memory profile cache configuration.
///
/// Staleness is bounded by the TTL: a role change or onboarding completion
/// becomes visible to the gate at most `time_to_live_seconds` later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether the profile cache is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Maximum number of cached profiles.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// TTL for cached profiles in seconds.
    #[serde(default = "default_ttl")]
    pub time_to_live_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_capacity: default_max_capacity(),
            time_to_live_seconds: default_ttl(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_max_capacity() -> u64 {
    10000
}

fn default_ttl() -> u64 {
    30
}
