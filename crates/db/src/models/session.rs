//! Admin session model and DTOs.

use holocron_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An admin session row from the `admin_sessions` table.
///
/// `token_hash` is the SHA-256 digest of the cookie token; the plaintext is
/// never stored.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new admin session.
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
