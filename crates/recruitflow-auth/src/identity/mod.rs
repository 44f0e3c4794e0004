//! Session identity resolution.

pub mod claims;
pub mod resolver;

pub use claims::Claims;
pub use resolver::{Identity, IdentityOutcome, IdentityResolver, JwtIdentityResolver};
