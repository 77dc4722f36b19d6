//! Movie content entity.

use holocron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub category_id: DbId,
    pub trilogy_id: DbId,
    pub title: String,
    pub year_made: i32,
    pub synopsis: String,
    /// Poster image reference (a path or URL, not the image itself).
    pub poster: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Form DTO for creating or overwriting a movie.
#[derive(Debug, Deserialize)]
pub struct MovieForm {
    pub category_id: DbId,
    pub trilogy_id: DbId,
    pub title: String,
    pub year_made: i32,
    pub synopsis: String,
    pub poster: String,
}
