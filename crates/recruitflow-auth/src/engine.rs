//! The access decision engine.
//!
//! Combines the resolved identity, the profile lookup outcome, and the
//! path classification into exactly one [`Decision`] per request. Both
//! `derive_state` and `evaluate` are pure: all inputs arrive as explicit
//! values, never from ambient request state, and no arm can fail. The
//! only possible outputs are Allow and Redirect; a lookup failure
//! collapses into the deny state before evaluation, so no error path can
//! ever produce an Allow on a non-public path.

use recruitflow_entity::profile::{Profile, Role};

use crate::identity::IdentityOutcome;
use crate::paths::PathClass;
use crate::redirect::{default_path_for, setup_path_for};

/// The caller's authorization state, re-derived per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No valid session credential.
    Anonymous,
    /// Authenticated, but no profile row and no signup role hint. Also the
    /// state every lookup failure collapses into.
    NoProfile,
    /// Authenticated with a role, onboarding not yet complete.
    Onboarding(Role),
    /// Authenticated and fully onboarded.
    Active(Role),
}

/// Outcome of the profile lookup, as seen by state derivation.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    /// A profile row exists.
    Found(Profile),
    /// No profile row yet; a legitimate mid-registration state.
    NotFound,
    /// The lookup itself failed (transport or database error).
    Failed,
}

/// Why a redirect was produced, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// Unauthenticated or unusable account; send to the login page.
    Login,
    /// Onboarding incomplete; send to the role's setup funnel.
    Setup,
    /// Cross-role access denied; send to the caller's own dashboard.
    OwnDashboard,
    /// Entry-point or root normalization for an active account.
    RoleDefault,
}

/// The gate's verdict for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Pass the request through unmodified.
    Allow,
    /// Replace the response with a redirect.
    Redirect {
        /// The `Location` value.
        target: String,
        /// Why the redirect was produced.
        reason: RedirectReason,
    },
}

impl Decision {
    fn redirect(target: impl Into<String>, reason: RedirectReason) -> Self {
        Self::Redirect {
            target: target.into(),
            reason,
        }
    }
}

/// Derive the caller's authorization state from the identity and profile
/// lookup outcomes.
///
/// The signup role hint is trusted for routing only: it can place a
/// profile-less caller into `Onboarding`, never into `Active`, so it can
/// never unlock a protected tree.
pub fn derive_state(identity: &IdentityOutcome, lookup: LookupOutcome) -> AuthState {
    let IdentityOutcome::Authenticated(identity) = identity else {
        return AuthState::Anonymous;
    };

    match lookup {
        LookupOutcome::Found(profile) => {
            if profile.onboarding_completed {
                AuthState::Active(profile.role)
            } else {
                AuthState::Onboarding(profile.role)
            }
        }
        LookupOutcome::NotFound => match identity.role_hint {
            Some(role) => AuthState::Onboarding(role),
            None => AuthState::NoProfile,
        },
        LookupOutcome::Failed => AuthState::NoProfile,
    }
}

/// Evaluate the decision table for one request.
///
/// `original` is the request's path-and-query, carried into the login
/// redirect as a return hint. The table is total: every
/// (state, class) pair maps to exactly one decision.
pub fn evaluate(state: AuthState, class: PathClass, original: &str) -> Decision {
    match state {
        AuthState::Anonymous | AuthState::NoProfile => match class {
            PathClass::Public { .. } => Decision::Allow,
            _ => login_redirect(original),
        },

        AuthState::Onboarding(role) => match class {
            PathClass::SetupPath(r) if r == role => Decision::Allow,
            PathClass::RoleSelection => Decision::Allow,
            _ => Decision::redirect(setup_path_for(role), RedirectReason::Setup),
        },

        AuthState::Active(role) => match class {
            PathClass::Public { entry: true } | PathClass::AppRoot => {
                Decision::redirect(default_path_for(role), RedirectReason::RoleDefault)
            }
            PathClass::Public { entry: false } => Decision::Allow,
            PathClass::Protected(r) if r == role => Decision::Allow,
            PathClass::Protected(_) => {
                Decision::redirect(default_path_for(role), RedirectReason::OwnDashboard)
            }
            PathClass::RoleSelection if role.is_org_scoped() => Decision::Allow,
            PathClass::RoleSelection => {
                Decision::redirect(default_path_for(role), RedirectReason::OwnDashboard)
            }
            PathClass::SetupPath(r) if r == role => {
                // Onboarding is one-shot; a completed account does not
                // re-enter its funnel.
                Decision::redirect(default_path_for(role), RedirectReason::RoleDefault)
            }
            PathClass::SetupPath(_) => {
                Decision::redirect(default_path_for(role), RedirectReason::OwnDashboard)
            }
            PathClass::Unclassified => Decision::Allow,
        },
    }
}

/// Build the login redirect, carrying the original path as a return hint.
fn login_redirect(original: &str) -> Decision {
    let target = if original.is_empty() || original == "/" {
        "/login".to_string()
    } else {
        format!("/login?next={}", urlencoding::encode(original))
    };
    Decision::redirect(target, RedirectReason::Login)
}
