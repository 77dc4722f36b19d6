//! Route definitions for the `/admin` area.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, auth};
use crate::state::AppState;

use super::{categories, games, movies, series, trilogies};

/// Routes mounted at `/admin`.
///
/// Login and logout are public; everything else requires a live session
/// (enforced by handler extractors).
///
/// ```text
/// GET  /           -> landing
/// GET  /login      -> login_form
/// POST /login      -> login
/// POST /logout     -> logout
///
/// /categories      -> categories::router
/// /trilogies       -> trilogies::router
/// /movies          -> movies::router
/// /series          -> series::router
/// /games           -> games::router
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::landing))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", post(auth::logout))
        .nest("/categories", categories::router())
        .nest("/trilogies", trilogies::router())
        .nest("/movies", movies::router())
        .nest("/series", series::router())
        .nest("/games", games::router())
}
