//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the catalog
//! operations in `db::services`; handlers only pick status codes and headers.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};

use super::dto::{
    CreateGameDto, GameDto, HealthResponse, ListGamesQuery, SearchQuery, UpdateGameDto,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::GameId;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Game CRUD
// =============================================================================

/// GET /game?name=
///
/// List all games, optionally filtered by name. Always 200.
pub async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<ListGamesQuery>,
) -> HandlerResult<Vec<GameDto>> {
    let games = db_services::list_games(state.repository.as_ref(), query.name.as_deref()).await?;
    Ok(Json(games))
}

/// GET /game/{id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
) -> HandlerResult<GameDto> {
    let game = db_services::get_game(state.repository.as_ref(), id).await?;
    Ok(Json(game))
}

/// POST /game
///
/// Create a game. Responds 201 with a `Location` header pointing at the new
/// resource.
pub async fn create_game(
    State(state): State<AppState>,
    Json(input): Json<CreateGameDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<GameDto>), AppError> {
    let game = db_services::create_game(state.repository.as_ref(), &state.policy, input).await?;
    let location = format!("/game/{}", game.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(game),
    ))
}

/// PUT /game/{id}
///
/// Replace every descriptive field of an existing game. Responds 204.
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
    Json(input): Json<UpdateGameDto>,
) -> Result<StatusCode, AppError> {
    db_services::update_game(state.repository.as_ref(), &state.policy, id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /game/{id}
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<StatusCode, AppError> {
    db_services::delete_game(state.repository.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /game/search?name=
///
/// Store-side name search. A miss is 404 or an empty 200 depending on the
/// configured search-miss policy.
pub async fn search_games(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> HandlerResult<Vec<GameDto>> {
    let games =
        db_services::search_games(state.repository.as_ref(), &state.policy, &query.name).await?;
    Ok(Json(games))
}
