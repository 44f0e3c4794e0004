//! Repository implementations over the PostgreSQL pool.

pub mod profile;
