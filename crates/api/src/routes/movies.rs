//! Route definitions for `/admin/movies`.
//!
//! The public movie pages live in [`super::catalog`]; this router only
//! covers the session-guarded management screens.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/admin/movies`.
///
/// ```text
/// GET  /              -> list
/// GET  /new           -> new_form
/// POST /new           -> create
/// GET  /edit/{id}     -> edit_form
/// POST /edit/{id}     -> edit
/// GET  /delete/{id}   -> delete_confirm
/// POST /delete/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list))
        .route("/new", get(movies::new_form).post(movies::create))
        .route("/edit/{id}", get(movies::edit_form).post(movies::edit))
        .route(
            "/delete/{id}",
            get(movies::delete_confirm).post(movies::delete),
        )
}
