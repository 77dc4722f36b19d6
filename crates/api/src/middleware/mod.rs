//! Authentication middleware extractors.
//!
//! - [`session::CurrentAdmin`] -- Resolves the per-request identity from the
//!   session cookie; anonymous requests resolve to `None`.
//! - [`session::AdminUser`] -- Requires a logged-in admin; anonymous requests
//!   are redirected to the login screen.

pub mod session;
