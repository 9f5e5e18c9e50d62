pub mod auth;
pub mod health;
pub mod staff;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                  service banner (public)
///
/// /auth/signup       signup (public)
/// /auth/login        login (public)
/// /auth/profile      profile (requires auth)
///
/// /staff             list, create (requires auth)
/// /staff/{id}        get, update, delete (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::index))
        .nest("/auth", auth::router())
        .nest("/staff", staff::router())
}
