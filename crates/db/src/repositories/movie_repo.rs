//! Repository for the `movies` table.

use holocron_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{Movie, MovieForm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, trilogy_id, title, year_made, synopsis, poster, \
                       created_at, updated_at";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &MovieForm) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (category_id, trilogy_id, title, year_made, synopsis, poster)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(input.category_id)
            .bind(input.trilogy_id)
            .bind(&input.title)
            .bind(input.year_made)
            .bind(&input.synopsis)
            .bind(&input.poster)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Overwrite every field of a movie. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MovieForm,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies
             SET category_id = $2, trilogy_id = $3, title = $4, year_made = $5,
                 synopsis = $6, poster = $7, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(input.trilogy_id)
            .bind(&input.title)
            .bind(input.year_made)
            .bind(&input.synopsis)
            .bind(&input.poster)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
