//! First-run provisioning of the admin account.
//!
//! There is no self-registration, so the first admin comes from the
//! environment at startup. Seeding is skipped when any user already exists
//! or when `ADMIN_PASSWORD` is not set.

use holocron_db::models::user::CreateUser;
use holocron_db::repositories::UserRepo;
use holocron_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Seed the initial admin user from environment variables.
///
/// | Variable          | Default               |
/// |-------------------|-----------------------|
/// | `ADMIN_USERNAME`  | `admin`               |
/// | `ADMIN_EMAIL`     | `admin@example.com`   |
/// | `ADMIN_FIRSTNAME` | `Site`                |
/// | `ADMIN_LASTNAME`  | `Admin`               |
/// | `ADMIN_PASSWORD`  | unset skips seeding   |
pub async fn seed_initial_admin(pool: &DbPool) -> AppResult<()> {
    let existing = UserRepo::count(pool).await?;
    if existing > 0 {
        tracing::debug!(existing, "Users already present, skipping admin seed");
        return Ok(());
    }

    let Ok(password) = std::env::var("ADMIN_PASSWORD") else {
        tracing::warn!("No users exist and ADMIN_PASSWORD is not set, skipping admin seed");
        return Ok(());
    };

    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let firstname = std::env::var("ADMIN_FIRSTNAME").unwrap_or_else(|_| "Site".to_string());
    let lastname = std::env::var("ADMIN_LASTNAME").unwrap_or_else(|_| "Admin".to_string());

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        username,
        email,
        firstname,
        lastname,
        password_hash,
    };
    let user = UserRepo::create(pool, &input).await?;
    tracing::info!(id = user.id, username = %user.username, "Seeded initial admin user");

    Ok(())
}
