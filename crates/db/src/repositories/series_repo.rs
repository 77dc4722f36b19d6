//! Repository for the `series` table.

use holocron_core::types::DbId;
use sqlx::PgPool;

use crate::models::series::{Series, SeriesForm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, series_title, series_episode_title, year_made, \
                       last_year_made, synopsis, poster, created_at, updated_at";

/// Provides CRUD operations for series.
pub struct SeriesRepo;

impl SeriesRepo {
    /// Insert a new series, returning the created row.
    pub async fn create(pool: &PgPool, input: &SeriesForm) -> Result<Series, sqlx::Error> {
        let query = format!(
            "INSERT INTO series (category_id, series_title, series_episode_title, year_made,
                                 last_year_made, synopsis, poster)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(input.category_id)
            .bind(&input.series_title)
            .bind(&input.series_episode_title)
            .bind(input.year_made)
            .bind(input.last_year_made)
            .bind(&input.synopsis)
            .bind(&input.poster)
            .fetch_one(pool)
            .await
    }

    /// Find a series by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE id = $1");
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all series in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series ORDER BY id");
        sqlx::query_as::<_, Series>(&query).fetch_all(pool).await
    }

    /// Overwrite every field of a series. Returns `None` if no row exists.
    ///
    /// `last_year_made` is overwritten like everything else, so an empty
    /// form field clears a previously stored value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SeriesForm,
    ) -> Result<Option<Series>, sqlx::Error> {
        let query = format!(
            "UPDATE series
             SET category_id = $2, series_title = $3, series_episode_title = $4,
                 year_made = $5, last_year_made = $6, synopsis = $7, poster = $8,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.series_title)
            .bind(&input.series_episode_title)
            .bind(input.year_made)
            .bind(input.last_year_made)
            .bind(&input.synopsis)
            .bind(&input.poster)
            .fetch_optional(pool)
            .await
    }

    /// Delete a series. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM series WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
