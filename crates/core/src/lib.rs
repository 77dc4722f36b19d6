//! Shared domain types and errors for the holocron catalog service.

pub mod error;
pub mod types;
