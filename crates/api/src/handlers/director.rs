//! Handlers for the `/directors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::director::{Director, DirectorPayload};
use cinedex_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /directors/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// POST /directors/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<DirectorPayload>,
) -> AppResult<(StatusCode, Json<Director>)> {
    let director = DirectorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(director)))
}

/// GET /directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(director))
}

/// PUT /directors/{id}
///
/// Full replace: an omitted name is stored as NULL.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DirectorPayload>,
) -> AppResult<StatusCode> {
    DirectorRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /directors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))
    }
}
