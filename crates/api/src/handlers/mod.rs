//! Request handlers.
//!
//! Each submodule provides async handler functions for one slice of the
//! surface: the public catalog, the login flow, and one admin CRUD family
//! per entity. Handlers delegate to the repositories in `holocron_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod categories;
pub mod games;
pub mod movies;
pub mod series;
pub mod trilogies;

use holocron_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// Reject an empty required form field with the screen's exact message.
///
/// Mirrors the admin form rule: only emptiness is checked, whitespace-only
/// values pass.
pub(crate) fn validate_required(value: &str, message: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::Core(CoreError::Validation(message.to_string())));
    }
    Ok(())
}
