//! In-memory repository implementation.
//!
//! Used as the default backend for local development and throughout the
//! test suite. Clones share the same underlying map.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{name_matches, Game, GameId};
use crate::db::repository::{GameRepository, RepositoryError, RepositoryResult};

/// In-memory game store guarded by a read/write lock.
///
/// The lock is only held for a single map operation and never across an
/// `.await`.
#[derive(Clone, Default)]
pub struct LocalRepository {
    games: Arc<RwLock<HashMap<GameId, Game>>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given games.
    pub fn with_games(games: impl IntoIterator<Item = Game>) -> Self {
        let map = games.into_iter().map(|g| (g.id, g)).collect();
        Self {
            games: Arc::new(RwLock::new(map)),
        }
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    /// Remove every stored game.
    pub fn clear(&self) {
        self.games.write().clear();
    }
}

#[async_trait]
impl GameRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn get_games(&self) -> RepositoryResult<Vec<Game>> {
        Ok(self.games.read().values().cloned().collect())
    }

    async fn get_game(&self, id: GameId) -> RepositoryResult<Option<Game>> {
        Ok(self.games.read().get(&id).cloned())
    }

    async fn create_game(&self, game: &Game) -> RepositoryResult<()> {
        let mut games = self.games.write();
        if games.contains_key(&game.id) {
            return Err(RepositoryError::duplicate_game("create_game", game.id));
        }
        games.insert(game.id, game.clone());
        Ok(())
    }

    async fn update_game(&self, game: &Game) -> RepositoryResult<()> {
        match self.games.write().get_mut(&game.id) {
            Some(stored) => {
                *stored = game.clone();
                Ok(())
            }
            None => Err(RepositoryError::game_not_found("update_game", game.id)),
        }
    }

    async fn delete_game(&self, id: GameId) -> RepositoryResult<()> {
        self.games
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::game_not_found("delete_game", id))
    }

    async fn search_games(&self, name: &str) -> RepositoryResult<Vec<Game>> {
        Ok(self
            .games
            .read()
            .values()
            .filter(|g| name_matches(&g.name, name))
            .cloned()
            .collect())
    }
}
