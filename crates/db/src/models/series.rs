//! Series content entity.

use holocron_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A series row from the `series` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Series {
    pub id: DbId,
    pub category_id: DbId,
    pub series_title: String,
    pub series_episode_title: String,
    pub year_made: i32,
    /// `None` while the run is still airing.
    pub last_year_made: Option<i32>,
    pub synopsis: String,
    pub poster: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Form DTO for creating or overwriting a series.
#[derive(Debug, Deserialize)]
pub struct SeriesForm {
    pub category_id: DbId,
    pub series_title: String,
    pub series_episode_title: String,
    pub year_made: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub last_year_made: Option<i32>,
    pub synopsis: String,
    pub poster: String,
}

/// Browsers submit an unfilled number input as an empty string; map that to
/// `None` instead of failing the integer parse.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
