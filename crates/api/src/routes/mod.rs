pub mod exchanges;
pub mod health;
pub mod skills;
pub mod stats;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /users                        list, register
/// /users/{id}                   get, update profile
/// /users/{id}/skills            skills offered or sought by the user
/// /users/{id}/reviews           reviews the user has received
///
/// /skills                       list (filterable), create (auth)
/// /skills/{id}                  get, update, delete
/// /skills/{id}/matches          exchange match report
///
/// /exchanges                    list (filterable), propose (auth)
/// /exchanges/user/{user_id}     every exchange the user participates in
/// /exchanges/{id}               get, edit proposal, withdraw
/// /exchanges/{id}/status        settle a pending exchange (PATCH)
/// /exchanges/{id}/reviews       list, submit review (auth)
///
/// /api/stats/top-skills             most exchanged skills
/// /api/stats/active-users           most active participants
/// /api/stats/exchange-success-rate  completed share of all exchanges
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // User registration and profiles.
        .nest("/users", users::router())
        // Skill catalogue and match reports.
        .nest("/skills", skills::router())
        // Exchange lifecycle, with reviews nested per exchange.
        .nest("/exchanges", exchanges::router())
        // Aggregate reports over the exchange history.
        .nest("/api/stats", stats::router())
}
