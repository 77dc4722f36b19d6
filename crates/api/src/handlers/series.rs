//! Handlers for the `/admin/series` resource.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::category::Category;
use holocron_db::models::series::{Series, SeriesForm};
use holocron_db::repositories::{CategoryRepo, SeriesRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_required;
use crate::middleware::session::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload behind the new/edit form screens.
#[derive(Debug, Serialize)]
pub struct SeriesFormScreen {
    pub series: Option<Series>,
    pub categories: Vec<Category>,
}

/// GET /admin/series
pub async fn list(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<DataResponse<Vec<Series>>>> {
    let series = SeriesRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: series }))
}

/// GET /admin/series/new
pub async fn new_form(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<DataResponse<SeriesFormScreen>>> {
    let screen = form_screen(&state, None).await?;
    Ok(Json(DataResponse { data: screen }))
}

/// POST /admin/series/new
pub async fn create(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Form(input): Form<SeriesForm>,
) -> AppResult<Redirect> {
    validate_required(&input.series_title, "Title is required.")?;

    let series = SeriesRepo::create(&state.pool, &input).await?;
    tracing::info!(id = series.id, title = %series.series_title, "Series created");

    Ok(Redirect::to("/admin/series"))
}

/// GET /admin/series/edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SeriesFormScreen>>> {
    let series = find_or_404(&state, id).await?;
    let screen = form_screen(&state, Some(series)).await?;
    Ok(Json(DataResponse { data: screen }))
}

/// POST /admin/series/edit/{id}
pub async fn edit(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
    Form(input): Form<SeriesForm>,
) -> AppResult<Redirect> {
    find_or_404(&state, id).await?;
    validate_required(&input.series_title, "Series name is required.")?;

    SeriesRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;

    Ok(Redirect::to("/admin/series"))
}

/// GET /admin/series/delete/{id}
///
/// Confirmation screen only. Nothing is deleted until the POST arrives.
pub async fn delete_confirm(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Series>>> {
    let series = find_or_404(&state, id).await?;
    Ok(Json(DataResponse { data: series }))
}

/// POST /admin/series/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let deleted = SeriesRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(id, "Series deleted");

    Ok(Redirect::to("/admin/series"))
}

async fn form_screen(state: &AppState, series: Option<Series>) -> AppResult<SeriesFormScreen> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(SeriesFormScreen { series, categories })
}

async fn find_or_404(state: &AppState, id: DbId) -> AppResult<Series> {
    SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Series",
        id,
    })
}
