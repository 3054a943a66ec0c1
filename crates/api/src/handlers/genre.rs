//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::genre::{Genre, GenrePayload};
use cinedex_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /genres/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// POST /genres/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<GenrePayload>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    let genre = GenreRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(genre))
}

/// PUT /genres/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GenrePayload>,
) -> AppResult<StatusCode> {
    GenreRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /genres/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GenreRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Genre", id }))
    }
}
