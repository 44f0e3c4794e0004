//! Session token verification configuration.
//!
//! RecruitFlow never issues tokens; the external auth provider does.
//! This section only configures how the gate verifies what it is handed.

use serde::{Deserialize, Serialize};

/// Token verification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret for session token verification (HS256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Clock-skew leeway applied to expiry validation, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            leeway_seconds: default_leeway(),
            session_cookie: default_session_cookie(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_leeway() -> u64 {
    5
}

fn default_session_cookie() -> String {
    "rf_session".to_string()
}
