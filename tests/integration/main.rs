//! Integration tests for the authorization gate, driven through the full
//! Axum router with in-memory identity and profile fakes.

mod helpers;

mod gate_test;
mod jwt_test;
