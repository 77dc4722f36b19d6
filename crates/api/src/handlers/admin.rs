//! Handler for the `/admin` landing page.
//!
//! Requires a live session via [`AdminUser`]; anonymous visitors are
//! redirected to the login form by the extractor.

use axum::Json;
use holocron_db::models::user::UserProfile;

use crate::middleware::session::AdminUser;
use crate::response::DataResponse;

/// GET /admin
///
/// Return the signed-in admin's profile for the dashboard header.
pub async fn landing(AdminUser(admin): AdminUser) -> Json<DataResponse<UserProfile>> {
    Json(DataResponse {
        data: UserProfile::from(&admin),
    })
}
