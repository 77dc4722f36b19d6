//! Repository for the `games` table.

use holocron_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{Game, GameForm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, title, gaming_system, year_made, synopsis, poster, \
                       created_at, updated_at";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row.
    pub async fn create(pool: &PgPool, input: &GameForm) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (category_id, title, gaming_system, year_made, synopsis, poster)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.gaming_system)
            .bind(input.year_made)
            .bind(&input.synopsis)
            .bind(&input.poster)
            .fetch_one(pool)
            .await
    }

    /// Find a game by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all games in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY id");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    /// Overwrite every field of a game. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GameForm,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "UPDATE games
             SET category_id = $2, title = $3, gaming_system = $4, year_made = $5,
                 synopsis = $6, poster = $7, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.gaming_system)
            .bind(input.year_made)
            .bind(&input.synopsis)
            .bind(&input.poster)
            .fetch_optional(pool)
            .await
    }

    /// Delete a game. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
