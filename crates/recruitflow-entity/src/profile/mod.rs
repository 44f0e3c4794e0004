//! Profile domain entities.

pub mod model;
pub mod role;

pub use model::Profile;
pub use role::Role;
