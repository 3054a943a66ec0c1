//! Repository for the `movies` table.

use cinedex_core::types::DbId;

use crate::models::movie::{Movie, MovieListing, MoviePayload};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, trailer, year, rating, director_id, genre_id";

/// Provides CRUD operations and filtered listings for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &DbPool, input: &MoviePayload) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies
                (title, description, trailer, year, rating, director_id, genre_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.director_id)
            .bind(input.genre_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies matching the given director and/or genre references.
    ///
    /// A `None` filter places no constraint on that column; with both
    /// filters present a row must match both.
    pub async fn list_filtered(
        pool: &DbPool,
        director_id: Option<DbId>,
        genre_id: Option<DbId>,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        match (director_id, genre_id) {
            (Some(director), Some(genre)) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM movies
                     WHERE director_id = $1 AND genre_id = $2
                     ORDER BY id"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(director)
                    .bind(genre)
                    .fetch_all(pool)
                    .await
            }
            (Some(director), None) => {
                let query =
                    format!("SELECT {COLUMNS} FROM movies WHERE director_id = $1 ORDER BY id");
                sqlx::query_as::<_, Movie>(&query)
                    .bind(director)
                    .fetch_all(pool)
                    .await
            }
            (None, Some(genre)) => {
                let query =
                    format!("SELECT {COLUMNS} FROM movies WHERE genre_id = $1 ORDER BY id");
                sqlx::query_as::<_, Movie>(&query)
                    .bind(genre)
                    .fetch_all(pool)
                    .await
            }
            (None, None) => {
                let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
                sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
            }
        }
    }

    /// List all movies with director/genre references resolved to names.
    ///
    /// The joins are LEFT JOINs: a dangling or absent reference yields a
    /// NULL name rather than dropping the row or failing the query.
    pub async fn list_resolved(pool: &DbPool) -> Result<Vec<MovieListing>, sqlx::Error> {
        sqlx::query_as::<_, MovieListing>(
            "SELECT m.id, m.title, m.description, m.trailer, m.year, m.rating,
                    d.name AS director_id, g.name AS genre_id
             FROM movies m
             LEFT JOIN directors d ON d.id = m.director_id
             LEFT JOIN genres g ON g.id = m.genre_id
             ORDER BY m.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Fully replace a movie. Every column is overwritten from `input`,
    /// so `None` fields are stored as NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &MoviePayload,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = $1,
                description = $2,
                trailer = $3,
                year = $4,
                rating = $5,
                director_id = $6,
                genre_id = $7
             WHERE id = $8
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.director_id)
            .bind(input.genre_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
