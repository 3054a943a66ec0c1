//! Repository for the `genres` table.

use cinedex_core::types::DbId;

use crate::models::genre::{Genre, GenrePayload};
use crate::DbPool;

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    pub async fn create(pool: &DbPool, input: &GenrePayload) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Fully replace a genre; returns `None` if the row does not exist.
    pub async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &GenrePayload,
    ) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "UPDATE genres SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(&input.name)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a genre by ID. Referencing movies keep their dangling id.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
