//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// Routes mounted at `/directors`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(director::list).post(director::create))
        .route(
            "/{id}",
            get(director::get_by_id)
                .put(director::replace)
                .delete(director::delete),
        )
}
