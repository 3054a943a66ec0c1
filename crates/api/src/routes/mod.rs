pub mod directors;
pub mod genres;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree, mounted at the application root.
///
/// ```text
/// /movies/              list (optional ?director_id=&genre_id=), create
/// /movies/{id}          get, replace, delete
/// /directors/           list, create
/// /directors/{id}       get, replace, delete
/// /genres/              list, create
/// /genres/{id}          get, replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/directors", directors::router())
        .nest("/genres", genres::router())
}
