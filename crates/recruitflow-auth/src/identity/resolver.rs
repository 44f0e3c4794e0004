//! Session token validation and identity resolution.
//!
//! Resolution is infallible by contract: a missing, malformed, or expired
//! token is a normal outcome ([`IdentityOutcome::Anonymous`]), not an
//! error. Token issuance and refresh belong to the external auth provider;
//! the gate only ever verifies what a request carries.

use http::HeaderMap;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

use recruitflow_core::config::auth::AuthConfig;
use recruitflow_entity::profile::Role;

use super::claims::Claims;

/// An authenticated caller, resolved fresh for each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Auth-provider user ID.
    pub user_id: Uuid,
    /// Signup role hint, used only to route profile-less users to setup.
    pub role_hint: Option<Role>,
}

/// Outcome of identity resolution for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityOutcome {
    /// No valid session credential was presented.
    Anonymous,
    /// A valid session token identified the caller.
    Authenticated(Identity),
}

/// Resolves a request's credentials to an identity, or anonymous.
pub trait IdentityResolver: Send + Sync {
    /// Resolve the caller from the request headers. Never fails.
    fn resolve(&self, headers: &HeaderMap) -> IdentityOutcome;
}

/// JWT-backed identity resolver.
///
/// Accepts the session token from either an `Authorization: Bearer` header
/// or the configured session cookie, and validates HS256 signature and
/// expiry with clock-skew leeway.
#[derive(Clone)]
pub struct JwtIdentityResolver {
    decoding_key: DecodingKey,
    validation: Validation,
    cookie_name: String,
}

impl std::fmt::Debug for JwtIdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIdentityResolver")
            .field("cookie_name", &self.cookie_name)
            .finish()
    }
}

impl JwtIdentityResolver {
    /// Creates a new resolver from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            cookie_name: config.session_cookie.clone(),
        }
    }

    /// Pull the raw token from the bearer header or the session cookie.
    fn extract_token<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        let bearer = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        if bearer.is_some() {
            return bearer;
        }

        let cookies = headers.get("cookie").and_then(|v| v.to_str().ok())?;
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == self.cookie_name).then_some(value)
        })
    }
}

impl IdentityResolver for JwtIdentityResolver {
    fn resolve(&self, headers: &HeaderMap) -> IdentityOutcome {
        let Some(token) = self.extract_token(headers) else {
            return IdentityOutcome::Anonymous;
        };

        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => IdentityOutcome::Authenticated(Identity {
                user_id: data.claims.user_id(),
                role_hint: data.claims.role,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected, treating as anonymous");
                IdentityOutcome::Anonymous
            }
        }
    }
}
