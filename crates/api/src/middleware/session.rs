//! Session-cookie authentication extractors.
//!
//! Every request may carry the session cookie set at login. [`CurrentAdmin`]
//! resolves it to a user without rejecting, so public handlers can see who
//! is asking. [`AdminUser`] is the guard for the admin surface: anonymous
//! requests never reach the wrapped handler and are redirected to the login
//! screen instead.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use holocron_db::models::user::User;
use holocron_db::repositories::{SessionRepo, UserRepo};

use crate::auth::session::{hash_session_token, token_from_cookie_header};
use crate::error::AppError;
use crate::state::AppState;

/// Per-request identity resolved from the session cookie.
///
/// `None` means the request is anonymous: no cookie, an unknown token, or an
/// expired session. Resolution itself never rejects.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub Option<User>);

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(token_from_cookie_header);

        let Some(token) = token else {
            return Ok(CurrentAdmin(None));
        };

        let session =
            SessionRepo::find_active_by_token_hash(&state.pool, &hash_session_token(token))
                .await?;
        let Some(session) = session else {
            return Ok(CurrentAdmin(None));
        };

        // A session row without its user can only happen in a narrow race
        // with user deletion; treat it as anonymous.
        let user = UserRepo::find_by_id(&state.pool, session.user_id).await?;
        Ok(CurrentAdmin(user))
    }
}

/// Requires a logged-in admin.
///
/// ```ignore
/// async fn admin_only(AdminUser(user): AdminUser) -> AppResult<Json<()>> {
///     // user is guaranteed to be logged in here
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

/// Rejection for [`AdminUser`]: a redirect to the login screen for anonymous
/// requests, or a passthrough error when session resolution itself failed.
pub enum AdminRejection {
    LoginRedirect,
    Error(AppError),
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            AdminRejection::LoginRedirect => Redirect::to("/admin/login").into_response(),
            AdminRejection::Error(err) => err.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AdminRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentAdmin(user) = CurrentAdmin::from_request_parts(parts, state)
            .await
            .map_err(AdminRejection::Error)?;

        match user {
            Some(user) => Ok(AdminUser(user)),
            None => Err(AdminRejection::LoginRedirect),
        }
    }
}
