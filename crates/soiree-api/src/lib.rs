//! Soirée API: HTTP host for the party-game engine.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the full application router. `main.rs` adds the tracing and CORS
/// layers on top.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/werewolf", routes::werewolf::router())
        .nest("/api/v1/undercover", routes::undercover::router())
        .nest("/api/v1/words", routes::words::router())
        .with_state(app_state)
}
