//! Repository for the `trilogies` table.

use holocron_core::types::DbId;
use sqlx::PgPool;

use crate::models::trilogy::{Trilogy, TrilogyForm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, type, created_at, updated_at";

/// Provides CRUD operations for trilogies.
pub struct TrilogyRepo;

impl TrilogyRepo {
    /// Insert a new trilogy, returning the created row.
    pub async fn create(pool: &PgPool, input: &TrilogyForm) -> Result<Trilogy, sqlx::Error> {
        let query = format!("INSERT INTO trilogies (type) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Trilogy>(&query)
            .bind(&input.kind)
            .fetch_one(pool)
            .await
    }

    /// Find a trilogy by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trilogy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trilogies WHERE id = $1");
        sqlx::query_as::<_, Trilogy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all trilogies in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Trilogy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trilogies ORDER BY id");
        sqlx::query_as::<_, Trilogy>(&query).fetch_all(pool).await
    }

    /// Overwrite every field of a trilogy. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TrilogyForm,
    ) -> Result<Option<Trilogy>, sqlx::Error> {
        let query = format!(
            "UPDATE trilogies SET type = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trilogy>(&query)
            .bind(id)
            .bind(&input.kind)
            .fetch_optional(pool)
            .await
    }

    /// Delete a trilogy. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key error if any movie still references the
    /// trilogy.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trilogies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
