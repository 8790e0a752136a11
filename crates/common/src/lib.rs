//! Shared building blocks for the admin console workspace.

pub mod types;
pub mod utils;
