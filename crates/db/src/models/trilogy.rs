//! Trilogy reference entity: the saga grouping movies point at.

use holocron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A trilogy row from the `trilogies` table.
///
/// Shares the `type` naming quirk with categories: the column and wire name
/// is `type`, the struct field is `kind`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Trilogy {
    pub id: DbId,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Form DTO for creating or overwriting a trilogy.
#[derive(Debug, Deserialize)]
pub struct TrilogyForm {
    #[serde(rename = "type")]
    pub kind: String,
}
