pub mod auth;
pub mod equipment;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/me                                         current user (requires auth)
///
/// /equipment                                       create (POST)
/// /equipment/types                                 types grouped by family
/// /equipment/types/{idType}/config                 type configuration
/// /equipment/check-numero/{numeroInterne}          internal number check
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/equipment", equipment::router())
}
