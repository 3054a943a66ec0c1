//! Movie entity model and DTOs.

use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
///
/// Serialized as-is for single-record and filtered list responses, with
/// `director_id` / `genre_id` as raw foreign keys.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<i64>,
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

/// A movie row for the unfiltered listing, with references resolved to
/// display names.
///
/// The `director_id` / `genre_id` keys are kept for wire compatibility but
/// carry the referenced director's / genre's NAME. A dangling or absent
/// reference resolves to NULL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieListing {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<i64>,
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

/// Payload for creating or fully replacing a movie.
///
/// Replace semantics are destructive: every column is overwritten from the
/// payload, so a field omitted from the request body is stored as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<i64>,
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}
