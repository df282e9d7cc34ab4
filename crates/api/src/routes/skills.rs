//! Route definitions for the `/skills` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create (auth required)
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/matches   -> find_matches
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list).post(skills::create))
        .route(
            "/{id}",
            get(skills::get_by_id)
                .put(skills::update)
                .delete(skills::delete),
        )
        .route("/{id}/matches", get(skills::find_matches))
}
