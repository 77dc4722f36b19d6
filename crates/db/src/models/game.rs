//! Game content entity.

use holocron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A game row from the `games` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Game {
    pub id: DbId,
    pub category_id: DbId,
    pub title: String,
    /// Platform the game shipped on (e.g. `"PC"`, `"PS5"`).
    pub gaming_system: String,
    pub year_made: i32,
    pub synopsis: String,
    pub poster: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Form DTO for creating or overwriting a game.
#[derive(Debug, Deserialize)]
pub struct GameForm {
    pub category_id: DbId,
    pub title: String,
    pub gaming_system: String,
    pub year_made: i32,
    pub synopsis: String,
    pub poster: String,
}
