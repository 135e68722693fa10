//! High-level catalog operations over any [`GameRepository`].
//!
//! These functions hold the request-handling contract of the catalog (name
//! filtering, not-found semantics, validation, search-miss policy, logging)
//! so that the HTTP handlers only translate results into status codes.
//!
//! Every operation emits one `info` event. Events are fire-and-forget and
//! never influence the returned value.

use tracing::info;

use super::repository::{ErrorContext, GameRepository, RepositoryError, RepositoryResult};
use crate::api::{name_matches, CreateGameDto, Game, GameDto, GameId, UpdateGameDto};
use crate::services::{CatalogPolicy, SearchMissPolicy, ValidationError};

fn rejected(operation: &'static str, err: ValidationError) -> RepositoryError {
    RepositoryError::validation(err.to_string())
        .with_context(ErrorContext::new(operation).with_details(format!("field={}", err.field)))
}

/// Check that the store is reachable.
pub async fn health_check(repo: &dyn GameRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// List every game, optionally keeping only names containing `name_filter`
/// (case-insensitive). An empty filter is the same as no filter.
pub async fn list_games(
    repo: &dyn GameRepository,
    name_filter: Option<&str>,
) -> RepositoryResult<Vec<GameDto>> {
    let games = repo.get_games().await?;
    let dtos: Vec<GameDto> = match name_filter.filter(|f| !f.is_empty()) {
        Some(filter) => games
            .into_iter()
            .filter(|g| name_matches(&g.name, filter))
            .map(GameDto::from)
            .collect(),
        None => games.into_iter().map(GameDto::from).collect(),
    };

    info!(count = dtos.len(), "Retrieved {} games", dtos.len());
    Ok(dtos)
}

/// Fetch one game.
pub async fn get_game(repo: &dyn GameRepository, id: GameId) -> RepositoryResult<GameDto> {
    match repo.get_game(id).await? {
        Some(game) => {
            info!(%id, "Returned game {}", id);
            Ok(game.into())
        }
        None => {
            info!(%id, "Get request: not found");
            Err(RepositoryError::game_not_found("get_game", id))
        }
    }
}

/// Validate the input, assign a fresh id and store the new game.
pub async fn create_game(
    repo: &dyn GameRepository,
    policy: &CatalogPolicy,
    input: CreateGameDto,
) -> RepositoryResult<GameDto> {
    if let Err(err) = policy.validator.validate(&input.fields()) {
        info!(field = err.field, "Create request rejected: {}", err);
        return Err(rejected("create_game", err));
    }

    let game = Game::from_create(input);
    repo.create_game(&game).await?;

    info!(id = %game.id, "Game {} created", game.id);
    Ok(game.into())
}

/// Validate the input and overwrite every descriptive field of an existing
/// game. Last writer wins.
pub async fn update_game(
    repo: &dyn GameRepository,
    policy: &CatalogPolicy,
    id: GameId,
    input: UpdateGameDto,
) -> RepositoryResult<()> {
    if let Err(err) = policy.validator.validate(&input.fields()) {
        info!(%id, field = err.field, "Update request rejected: {}", err);
        return Err(rejected("update_game", err));
    }

    let Some(mut game) = repo.get_game(id).await? else {
        info!(%id, "Update request: not found");
        return Err(RepositoryError::game_not_found("update_game", id));
    };

    game.apply_update(input);
    repo.update_game(&game).await?;

    info!(%id, "Game {} updated", id);
    Ok(())
}

/// Remove an existing game.
pub async fn delete_game(repo: &dyn GameRepository, id: GameId) -> RepositoryResult<()> {
    if repo.get_game(id).await?.is_none() {
        info!(%id, "Delete request: not found");
        return Err(RepositoryError::game_not_found("delete_game", id));
    }

    repo.delete_game(id).await?;

    info!(%id, "Game {} deleted", id);
    Ok(())
}

/// Store-side name search. What a miss returns depends on `policy.search_miss`.
pub async fn search_games(
    repo: &dyn GameRepository,
    policy: &CatalogPolicy,
    name: &str,
) -> RepositoryResult<Vec<GameDto>> {
    let games = repo.search_games(name).await?;

    if games.is_empty() && policy.search_miss == SearchMissPolicy::NotFound {
        info!(query = name, "Search request: not found");
        return Err(RepositoryError::not_found(format!("no game matches '{}'", name))
            .with_context(ErrorContext::new("search_games").with_details(format!("name={}", name))));
    }

    info!(count = games.len(), "Retrieved {} search results", games.len());
    Ok(games.into_iter().map(GameDto::from).collect())
}
