//! Route definitions for the `/exchanges` resource.
//!
//! Also nests reviews under `/exchanges/{id}/reviews`: reviews only exist
//! in the context of a completed exchange.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{exchanges, reviews};
use crate::state::AppState;

/// Routes mounted at `/exchanges`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create (auth required)
/// GET    /user/{user_id}   -> list_by_user
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update (sender, pending only)
/// DELETE /{id}             -> delete (sender, pending only)
/// PATCH  /{id}/status      -> update_status (receiver, pending only)
/// GET    /{id}/reviews     -> list_by_exchange
/// POST   /{id}/reviews     -> create review (participant, completed only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(exchanges::list).post(exchanges::create))
        .route("/user/{user_id}", get(exchanges::list_by_user))
        .route(
            "/{id}",
            get(exchanges::get_by_id)
                .put(exchanges::update)
                .delete(exchanges::delete),
        )
        .route("/{id}/status", patch(exchanges::update_status))
        .route(
            "/{id}/reviews",
            get(reviews::list_by_exchange).post(reviews::create),
        )
}
