//! Public catalog handlers: the landing payload, per-kind listings, and
//! feature detail pages. No authentication required.

use axum::extract::{Path, State};
use axum::Json;
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::game::Game;
use holocron_db::models::movie::Movie;
use holocron_db::models::series::Series;
use holocron_db::repositories::{GameRepo, MovieRepo, SeriesRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload behind `GET /`: the full catalog, one list per content kind.
#[derive(Debug, Serialize)]
pub struct CatalogIndex {
    pub movies: Vec<Movie>,
    pub series: Vec<Series>,
    pub games: Vec<Game>,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Json<DataResponse<CatalogIndex>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    let series = SeriesRepo::list(&state.pool).await?;
    let games = GameRepo::list(&state.pool).await?;

    Ok(Json(DataResponse {
        data: CatalogIndex {
            movies,
            series,
            games,
        },
    }))
}

/// GET /movies
pub async fn list_movies(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /series
pub async fn list_series(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Series>>>> {
    let series = SeriesRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: series }))
}

/// GET /games
pub async fn list_games(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Game>>>> {
    let games = GameRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: games }))
}

/// GET /feature/movies/{id}
pub async fn feature_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(Json(DataResponse { data: movie }))
}

/// GET /feature/series/{id}
pub async fn feature_series(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Series>>> {
    let series = SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id,
        }))?;
    Ok(Json(DataResponse { data: series }))
}

/// GET /feature/games/{id}
pub async fn feature_game(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Game>>> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;
    Ok(Json(DataResponse { data: game }))
}
