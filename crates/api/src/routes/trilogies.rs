//! Route definitions for `/admin/trilogies`.

use axum::routing::get;
use axum::Router;

use crate::handlers::trilogies;
use crate::state::AppState;

/// Routes mounted at `/admin/trilogies`.
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
        .route("/", get(trilogies::list))
        .route("/new", get(trilogies::new_form).post(trilogies::create))
        .route("/edit/{id}", get(trilogies::edit_form).post(trilogies::edit))
        .route(
            "/delete/{id}",
            get(trilogies::delete_confirm).post(trilogies::delete),
        )
}
