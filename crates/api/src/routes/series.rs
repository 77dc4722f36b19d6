//! Route definitions for `/admin/series`.

use axum::routing::get;
use axum::Router;

use crate::handlers::series;
use crate::state::AppState;

/// Routes mounted at `/admin/series`.
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
        .route("/", get(series::list))
        .route("/new", get(series::new_form).post(series::create))
        .route("/edit/{id}", get(series::edit_form).post(series::edit))
        .route(
            "/delete/{id}",
            get(series::delete_confirm).post(series::delete),
        )
}
