//! Route handlers.
//!
//! Everything behind the gate is deliberately thin: jobs, applications,
//! messaging, billing, and content generation live in their own services.
//! These handlers exist so the gate has real routes to guard.

pub mod dashboard;
pub mod health;
pub mod pages;
pub mod setup;
