//! Handlers for the `/admin/games` resource.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::category::Category;
use holocron_db::models::game::{Game, GameForm};
use holocron_db::repositories::{CategoryRepo, GameRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_required;
use crate::middleware::session::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload behind the new/edit form screens.
#[derive(Debug, Serialize)]
pub struct GameFormScreen {
    pub game: Option<Game>,
    pub categories: Vec<Category>,
}

/// GET /admin/games
pub async fn list(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<DataResponse<Vec<Game>>>> {
    let games = GameRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: games }))
}

/// GET /admin/games/new
pub async fn new_form(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<DataResponse<GameFormScreen>>> {
    let screen = form_screen(&state, None).await?;
    Ok(Json(DataResponse { data: screen }))
}

/// POST /admin/games/new
pub async fn create(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Form(input): Form<GameForm>,
) -> AppResult<Redirect> {
    validate_required(&input.title, "Title is required.")?;

    let game = GameRepo::create(&state.pool, &input).await?;
    tracing::info!(id = game.id, title = %game.title, "Game created");

    Ok(Redirect::to("/admin/games"))
}

/// GET /admin/games/edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GameFormScreen>>> {
    let game = find_or_404(&state, id).await?;
    let screen = form_screen(&state, Some(game)).await?;
    Ok(Json(DataResponse { data: screen }))
}

/// POST /admin/games/edit/{id}
pub async fn edit(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
    Form(input): Form<GameForm>,
) -> AppResult<Redirect> {
    find_or_404(&state, id).await?;
    validate_required(&input.title, "Game name is required.")?;

    GameRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;

    Ok(Redirect::to("/admin/games"))
}

/// GET /admin/games/delete/{id}
///
/// Confirmation screen only. Nothing is deleted until the POST arrives.
pub async fn delete_confirm(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Game>>> {
    let game = find_or_404(&state, id).await?;
    Ok(Json(DataResponse { data: game }))
}

/// POST /admin/games/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let deleted = GameRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(id, "Game deleted");

    Ok(Redirect::to("/admin/games"))
}

async fn form_screen(state: &AppState, game: Option<Game>) -> AppResult<GameFormScreen> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(GameFormScreen { game, categories })
}

async fn find_or_404(state: &AppState, id: DbId) -> AppResult<Game> {
    GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Game", id })
}
