//! Genre entity model and DTOs.

use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: Option<String>,
}

/// Payload for creating or fully replacing a genre.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenrePayload {
    pub name: Option<String>,
}
