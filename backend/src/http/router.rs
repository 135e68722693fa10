//! Route table and middleware.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Upper bound for JSON request bodies. Game records are a few short strings.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the catalog router around `state`.
pub fn create_router(state: AppState) -> Router {
    // Any origin: the catalog has no credentials to protect.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Game catalog
        .route(
            "/game",
            get(handlers::list_games).post(handlers::create_game),
        )
        .route("/game/search", get(handlers::search_games))
        .route(
            "/game/{id}",
            get(handlers::get_game)
                .put(handlers::update_game)
                .delete(handlers::delete_game),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
