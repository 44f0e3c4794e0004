//! # recruitflow-api
//!
//! Axum HTTP layer. The authorization gate wraps the whole router: every
//! request is decided (Allow or Redirect) before any handler runs, so
//! handlers never re-implement path-level role checks.

pub mod app;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use state::AppState;
