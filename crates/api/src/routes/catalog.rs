//! Route definitions for the public catalog pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// GET /                     -> index
/// GET /movies               -> list_movies
/// GET /series               -> list_series
/// GET /games                -> list_games
/// GET /feature/movies/{id}  -> feature_movie
/// GET /feature/series/{id}  -> feature_series
/// GET /feature/games/{id}   -> feature_game
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/movies", get(catalog::list_movies))
        .route("/series", get(catalog::list_series))
        .route("/games", get(catalog::list_games))
        .route("/feature/movies/{id}", get(catalog::feature_movie))
        .route("/feature/series/{id}", get(catalog::feature_series))
        .route("/feature/games/{id}", get(catalog::feature_game))
}
