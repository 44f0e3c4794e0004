//! # recruitflow-entity
//!
//! Domain entity models and enums for RecruitFlow.

pub mod profile;

pub use profile::{Profile, Role};
