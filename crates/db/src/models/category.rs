//! Category reference entity: the genre label content rows point at.

use holocron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category row from the `categories` table.
///
/// The label column is named `type` in the database and on the wire; the
/// struct field is `kind` because `type` is a reserved word.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Form DTO for creating or overwriting a category.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    #[serde(rename = "type")]
    pub kind: String,
}
