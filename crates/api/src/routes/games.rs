//! Route definitions for `/admin/games`.

use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Routes mounted at `/admin/games`.
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
        .route("/", get(games::list))
        .route("/new", get(games::new_form).post(games::create))
        .route("/edit/{id}", get(games::edit_form).post(games::edit))
        .route(
            "/delete/{id}",
            get(games::delete_confirm).post(games::delete),
        )
}
