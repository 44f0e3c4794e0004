//! Profile lookup: trait, Postgres implementation, and cache decorator.

pub mod cache;
pub mod lookup;
pub mod store;

pub use cache::CachedProfileLookup;
pub use lookup::ProfileLookup;
pub use store::PgProfileLookup;
