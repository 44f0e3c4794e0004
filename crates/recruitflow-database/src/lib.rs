//! # recruitflow-database
//!
//! PostgreSQL access layer: connection pool management, migrations, and
//! repositories.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
