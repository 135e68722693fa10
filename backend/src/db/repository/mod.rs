//! Repository trait for game persistence.
//!
//! The HTTP layer and the catalog services only ever talk to
//! [`GameRepository`]; concrete backends live in `db::repositories`.

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{Game, GameId};

/// Storage operations over the game collection.
///
/// Implementations must be safe to share across concurrently running
/// requests; callers hold them as `Arc<dyn GameRepository>`.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Check that the underlying store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch every stored game, in no particular order.
    async fn get_games(&self) -> RepositoryResult<Vec<Game>>;

    /// Fetch one game. `Ok(None)` means the id is unknown.
    async fn get_game(&self, id: GameId) -> RepositoryResult<Option<Game>>;

    /// Persist a new game. Fails with `Conflict` if the id is already taken.
    async fn create_game(&self, game: &Game) -> RepositoryResult<()>;

    /// Overwrite the stored game with the same id. Fails with `NotFound` if
    /// the id is unknown.
    async fn update_game(&self, game: &Game) -> RepositoryResult<()>;

    /// Remove a game. Fails with `NotFound` if the id is unknown.
    async fn delete_game(&self, id: GameId) -> RepositoryResult<()>;

    /// Store-side name search (case-insensitive substring). An empty vector
    /// means the store reported no result.
    async fn search_games(&self, name: &str) -> RepositoryResult<Vec<Game>>;
}
