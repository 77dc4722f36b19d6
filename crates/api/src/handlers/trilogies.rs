//! Handlers for the `/admin/trilogies` resource.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::trilogy::{Trilogy, TrilogyForm};
use holocron_db::repositories::TrilogyRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_required;
use crate::middleware::session::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload behind the new/edit form screens.
#[derive(Debug, Serialize)]
pub struct TrilogyFormScreen {
    pub trilogy: Option<Trilogy>,
}

/// GET /admin/trilogies
pub async fn list(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<DataResponse<Vec<Trilogy>>>> {
    let trilogies = TrilogyRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: trilogies }))
}

/// GET /admin/trilogies/new
pub async fn new_form(AdminUser(_admin): AdminUser) -> Json<DataResponse<TrilogyFormScreen>> {
    Json(DataResponse {
        data: TrilogyFormScreen { trilogy: None },
    })
}

/// POST /admin/trilogies/new
pub async fn create(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Form(input): Form<TrilogyForm>,
) -> AppResult<Redirect> {
    validate_required(&input.kind, "Trilogy name is required.")?;

    let trilogy = TrilogyRepo::create(&state.pool, &input).await?;
    tracing::info!(id = trilogy.id, kind = %trilogy.kind, "Trilogy created");

    Ok(Redirect::to("/admin/trilogies"))
}

/// GET /admin/trilogies/edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TrilogyFormScreen>>> {
    let trilogy = find_or_404(&state, id).await?;
    Ok(Json(DataResponse {
        data: TrilogyFormScreen {
            trilogy: Some(trilogy),
        },
    }))
}

/// POST /admin/trilogies/edit/{id}
pub async fn edit(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
    Form(input): Form<TrilogyForm>,
) -> AppResult<Redirect> {
    find_or_404(&state, id).await?;
    validate_required(&input.kind, "Trilogy name is required.")?;

    TrilogyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;

    Ok(Redirect::to("/admin/trilogies"))
}

/// GET /admin/trilogies/delete/{id}
///
/// Confirmation screen only. Nothing is deleted until the POST arrives.
pub async fn delete_confirm(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Trilogy>>> {
    let trilogy = find_or_404(&state, id).await?;
    Ok(Json(DataResponse { data: trilogy }))
}

/// POST /admin/trilogies/delete/{id}
///
/// Fails with 409 when movies still reference the row.
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let deleted = TrilogyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(id, "Trilogy deleted");

    Ok(Redirect::to("/admin/trilogies"))
}

async fn find_or_404(state: &AppState, id: DbId) -> AppResult<Trilogy> {
    TrilogyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Trilogy",
        id,
    })
}
