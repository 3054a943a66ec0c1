//! Handlers for the `/movies` resource.
//!
//! The listing shape depends on the filters: an unfiltered `GET /movies/`
//! resolves director/genre references to display names, while filtered
//! listings and single-record fetches return raw foreign-key ids.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::movie::{Movie, MoviePayload};
use cinedex_db::repositories::MovieRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters accepted by `GET /movies/`.
///
/// Kept as raw strings so a malformed value surfaces as a 400 with the
/// standard error body instead of a bare extractor rejection.
#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

/// GET /movies/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Response> {
    let director_id = parse_filter("director_id", params.director_id.as_deref())?;
    let genre_id = parse_filter("genre_id", params.genre_id.as_deref())?;

    if director_id.is_none() && genre_id.is_none() {
        let listings = MovieRepo::list_resolved(&state.pool).await?;
        return Ok(Json(listings).into_response());
    }

    let movies = MovieRepo::list_filtered(&state.pool, director_id, genre_id).await?;
    Ok(Json(movies).into_response())
}

/// POST /movies/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<MoviePayload>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = MovieRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Full replace: fields omitted from the body are stored as NULL.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoviePayload>,
) -> AppResult<StatusCode> {
    MovieRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }))
    }
}

/// Parse an optional integer filter value.
///
/// An empty string counts as absent; anything else that fails to parse is
/// a client error.
fn parse_filter(name: &str, raw: Option<&str>) -> Result<Option<DbId>, AppError> {
    match raw {
        None => Ok(None),
        Some("") => Ok(None),
        Some(value) => value.parse::<DbId>().map(Some).map_err(|_| {
            AppError::Core(CoreError::InvalidArgument(format!(
                "{name} must be an integer, got '{value}'"
            )))
        }),
    }
}
