//! Handlers for the `/admin/movies` resource.
//!
//! The form screens carry the category and trilogy listings so a client can
//! render the two reference dropdowns without extra round trips.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::category::Category;
use holocron_db::models::movie::{Movie, MovieForm};
use holocron_db::models::trilogy::Trilogy;
use holocron_db::repositories::{CategoryRepo, MovieRepo, TrilogyRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_required;
use crate::middleware::session::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload behind the new/edit form screens.
#[derive(Debug, Serialize)]
pub struct MovieFormScreen {
    pub movie: Option<Movie>,
    pub categories: Vec<Category>,
    pub trilogies: Vec<Trilogy>,
}

/// GET /admin/movies
pub async fn list(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /admin/movies/new
pub async fn new_form(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<DataResponse<MovieFormScreen>>> {
    let screen = form_screen(&state, None).await?;
    Ok(Json(DataResponse { data: screen }))
}

/// POST /admin/movies/new
pub async fn create(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Form(input): Form<MovieForm>,
) -> AppResult<Redirect> {
    validate_required(&input.title, "Title is required.")?;

    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(id = movie.id, title = %movie.title, "Movie created");

    Ok(Redirect::to("/admin/movies"))
}

/// GET /admin/movies/edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MovieFormScreen>>> {
    let movie = find_or_404(&state, id).await?;
    let screen = form_screen(&state, Some(movie)).await?;
    Ok(Json(DataResponse { data: screen }))
}

/// POST /admin/movies/edit/{id}
///
/// The row must exist before the form is validated, so a bad id yields 404
/// even when the submitted form is also invalid.
pub async fn edit(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
    Form(input): Form<MovieForm>,
) -> AppResult<Redirect> {
    find_or_404(&state, id).await?;
    validate_required(&input.title, "Movie name is required.")?;

    MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;

    Ok(Redirect::to("/admin/movies"))
}

/// GET /admin/movies/delete/{id}
///
/// Confirmation screen only. Nothing is deleted until the POST arrives.
pub async fn delete_confirm(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = find_or_404(&state, id).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// POST /admin/movies/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(id, "Movie deleted");

    Ok(Redirect::to("/admin/movies"))
}

async fn form_screen(state: &AppState, movie: Option<Movie>) -> AppResult<MovieFormScreen> {
    let categories = CategoryRepo::list(&state.pool).await?;
    let trilogies = TrilogyRepo::list(&state.pool).await?;
    Ok(MovieFormScreen {
        movie,
        categories,
        trilogies,
    })
}

async fn find_or_404(state: &AppState, id: DbId) -> AppResult<Movie> {
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id,
    })
}
