//! Route definitions for `/admin/categories`.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/admin/categories`.
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
        .route("/", get(categories::list))
        .route("/new", get(categories::new_form).post(categories::create))
        .route("/edit/{id}", get(categories::edit_form).post(categories::edit))
        .route(
            "/delete/{id}",
            get(categories::delete_confirm).post(categories::delete),
        )
}
