//! Handlers for the `/admin/categories` resource.
//!
//! Every handler requires a live admin session via [`AdminUser`].

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::category::{Category, CategoryForm};
use holocron_db::repositories::CategoryRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_required;
use crate::middleware::session::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload behind the new/edit form screens. `category` is `None` for the
/// blank "new" form and `Some` when editing an existing row.
#[derive(Debug, Serialize)]
pub struct CategoryFormScreen {
    pub category: Option<Category>,
}

/// GET /admin/categories
pub async fn list(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /admin/categories/new
pub async fn new_form(AdminUser(_admin): AdminUser) -> Json<DataResponse<CategoryFormScreen>> {
    Json(DataResponse {
        data: CategoryFormScreen { category: None },
    })
}

/// POST /admin/categories/new
pub async fn create(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Form(input): Form<CategoryForm>,
) -> AppResult<Redirect> {
    validate_required(&input.kind, "Category name is required.")?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(id = category.id, kind = %category.kind, "Category created");

    Ok(Redirect::to("/admin/categories"))
}

/// GET /admin/categories/edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CategoryFormScreen>>> {
    let category = find_or_404(&state, id).await?;
    Ok(Json(DataResponse {
        data: CategoryFormScreen {
            category: Some(category),
        },
    }))
}

/// POST /admin/categories/edit/{id}
///
/// The row must exist before the form is validated, so a bad id yields 404
/// even when the submitted form is also invalid.
pub async fn edit(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
    Form(input): Form<CategoryForm>,
) -> AppResult<Redirect> {
    find_or_404(&state, id).await?;
    validate_required(&input.kind, "Category name is required.")?;

    CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;

    Ok(Redirect::to("/admin/categories"))
}

/// GET /admin/categories/delete/{id}
///
/// Confirmation screen only. Nothing is deleted until the POST arrives.
pub async fn delete_confirm(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = find_or_404(&state, id).await?;
    Ok(Json(DataResponse { data: category }))
}

/// POST /admin/categories/delete/{id}
///
/// Fails with 409 when movies, series, or games still reference the row.
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(id, "Category deleted");

    Ok(Redirect::to("/admin/categories"))
}

async fn find_or_404(state: &AppState, id: DbId) -> AppResult<Category> {
    CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}
