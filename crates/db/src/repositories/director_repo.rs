//! Repository for the `directors` table.

use cinedex_core::types::DbId;

use crate::models::director::{Director, DirectorPayload};
use crate::DbPool;

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(pool: &DbPool, input: &DirectorPayload) -> Result<Director, sqlx::Error> {
        sqlx::query_as::<_, Director>(
            "INSERT INTO directors (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    /// Find a director by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>("SELECT id, name FROM directors WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all directors.
    pub async fn list(pool: &DbPool) -> Result<Vec<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>("SELECT id, name FROM directors ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Fully replace a director. A `None` name is stored as NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &DirectorPayload,
    ) -> Result<Option<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>(
            "UPDATE directors SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(&input.name)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a director by ID. Returns `true` if a row was removed.
    ///
    /// Movies referencing the director are left untouched; their reference
    /// dangles and resolves to a NULL name in the movie listing.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
