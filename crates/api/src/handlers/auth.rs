//! Handlers for admin login and logout.
//!
//! Login issues an opaque session token delivered as an `HttpOnly` cookie;
//! logout revokes the presented session and clears the cookie.

use axum::extract::State;
use axum::http::header::{HeaderMap, COOKIE, SET_COOKIE};
use axum::response::{AppendHeaders, IntoResponse, Redirect};
use axum::{Form, Json};
use chrono::Utc;
use holocron_core::error::CoreError;
use holocron_db::models::session::CreateSession;
use holocron_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::auth::session::{
    clear_session_cookie, generate_session_token, hash_session_token, session_cookie,
    token_from_cookie_header,
};
use crate::error::{AppError, AppResult};
use crate::middleware::session::CurrentAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Payload behind `GET /admin/login`. Lets a client skip the form when the
/// visitor already holds a live session.
#[derive(Debug, Serialize)]
pub struct LoginScreen {
    pub authenticated: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/login
pub async fn login_form(CurrentAdmin(admin): CurrentAdmin) -> Json<DataResponse<LoginScreen>> {
    Json(DataResponse {
        data: LoginScreen {
            authenticated: admin.is_some(),
        },
    })
}

/// POST /admin/login
///
/// Authenticate with username + password. On success sets the session cookie
/// and redirects to the admin landing page.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<LoginForm>,
) -> AppResult<impl IntoResponse> {
    // 1. Find user by username.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Incorrect username.".into())))?;

    // 2. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Incorrect password.".into(),
        )));
    }

    // 3. Revoke the session behind any stale cookie, then sweep expired rows.
    if let Some(old_token) = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(token_from_cookie_header)
    {
        SessionRepo::delete_by_token_hash(&state.pool, &hash_session_token(old_token)).await?;
    }
    SessionRepo::delete_expired(&state.pool).await?;

    // 4. Issue a fresh session.
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.session.expiry_hours);
    let session_input = CreateSession {
        user_id: user.id,
        token_hash,
        expires_at,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    tracing::info!(user_id = user.id, username = %user.username, "admin logged in");

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&token))]),
        Redirect::to("/admin"),
    ))
}

/// POST /admin/logout
///
/// Revoke the presented session (if any), clear the cookie, and redirect to
/// the login form. Safe to call without a session.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    if let Some(token) = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(token_from_cookie_header)
    {
        SessionRepo::delete_by_token_hash(&state.pool, &hash_session_token(token)).await?;
    }

    Ok((
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Redirect::to("/admin/login"),
    ))
}
