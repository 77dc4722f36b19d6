pub mod admin;
pub mod catalog;
pub mod categories;
pub mod games;
pub mod health;
pub mod movies;
pub mod series;
pub mod trilogies;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /                                    catalog landing (movies + series + games)
/// /movies                              movie listing
/// /series                              series listing
/// /games                               game listing
/// /feature/movies/{id}                 movie detail
/// /feature/series/{id}                 series detail
/// /feature/games/{id}                  game detail
///
/// /admin                               admin landing (session required)
/// /admin/login                         login form (GET), login (POST)
/// /admin/logout                        logout (POST)
///
/// /admin/categories                    list
/// /admin/categories/new                blank form (GET), create (POST)
/// /admin/categories/edit/{id}          edit form (GET), update (POST)
/// /admin/categories/delete/{id}        confirm (GET), delete (POST)
///
/// /admin/trilogies[...]                same shape as categories
/// /admin/movies[...]                   same shape as categories
/// /admin/series[...]                   same shape as categories
/// /admin/games[...]                    same shape as categories
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        // Public catalog pages.
        .merge(catalog::router())
        // Admin area. Session enforcement lives in the handler extractors.
        .nest("/admin", admin::router())
}
