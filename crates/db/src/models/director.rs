//! Director entity model and DTOs.

use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `directors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: Option<String>,
}

/// Payload for creating or fully replacing a director.
///
/// A missing `name` is stored as NULL, including on replace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorPayload {
    pub name: Option<String>,
}
