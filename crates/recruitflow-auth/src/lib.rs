//! # recruitflow-auth
//!
//! The request authorization and onboarding gate for RecruitFlow.
//!
//! Every inbound request is resolved to an identity, combined with the
//! caller's profile and the requested path's classification, and mapped to
//! exactly one [`engine::Decision`]: pass the request through, or replace
//! the response with a redirect. The decision table is pure and total, so
//! it is unit-testable without an HTTP server or database.
//!
//! ## Modules
//!
//! - `identity`: session token resolution (who is the caller, if anyone)
//! - `profile`: profile lookup trait, Postgres implementation, cache decorator
//! - `paths`: pure classification of request paths
//! - `engine`: the access decision state machine
//! - `redirect`: per-role canonical dashboard and setup targets

pub mod engine;
pub mod identity;
pub mod paths;
pub mod profile;
pub mod redirect;

pub use engine::{AuthState, Decision, LookupOutcome, RedirectReason, derive_state, evaluate};
pub use identity::{Identity, IdentityOutcome, IdentityResolver, JwtIdentityResolver};
pub use paths::{PathClass, classify};
pub use profile::{CachedProfileLookup, PgProfileLookup, ProfileLookup};
pub use redirect::{default_path_for, setup_path_for};
