//! Tower middleware for the HTTP layer.

pub mod cors;
pub mod gate;
pub mod logging;
