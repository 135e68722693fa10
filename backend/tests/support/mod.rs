//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use game_catalog::api::{CreateGameDto, Game, GameId, UpdateGameDto};
use game_catalog::db::{GameRepository, RepositoryError, RepositoryResult};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on drop (including on unwind) and serializes
/// access to the process environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

/// Every variable the catalog reads, all unset. Extend with overrides as
/// needed so a developer's shell cannot leak into a test.
pub const CLEAN_ENV: &[(&str, Option<&str>)] = &[
    ("REPOSITORY_TYPE", None),
    ("DATABASE_URL", None),
    ("PG_DATABASE_URL", None),
    ("DB_HOST", None),
    ("DB_PORT", None),
    ("DB_USER", None),
    ("DB_PASSWORD", None),
    ("DB_NAME", None),
    ("CATALOG_SEARCH_MISS", None),
    ("CATALOG_GRADE_MIN", None),
    ("CATALOG_GRADE_MAX", None),
    ("CATALOG_REQUIRE_NAME", None),
];

/// `CLEAN_ENV` with `overrides` applied on top.
pub fn env_with<'a>(overrides: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut changes: Vec<(&str, Option<&str>)> = CLEAN_ENV
        .iter()
        .filter(|(k, _)| !overrides.iter().any(|(o, _)| o == k))
        .copied()
        .collect();
    changes.extend_from_slice(overrides);
    changes
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn create_input(name: &str, grade: i32) -> CreateGameDto {
    CreateGameDto {
        name: name.to_string(),
        description: format!("{} description", name),
        grade,
        image: format!("{}.jpg", name.to_lowercase().replace(' ', "_")),
    }
}

pub fn update_input(name: &str, grade: i32) -> UpdateGameDto {
    UpdateGameDto {
        name: name.to_string(),
        description: format!("{} (updated)", name),
        grade,
        image: "updated.jpg".to_string(),
    }
}

pub fn game(name: &str, grade: i32) -> Game {
    Game::from_create(create_input(name, grade))
}

/// The three-title catalog used by the filter scenarios.
pub fn sample_games() -> Vec<Game> {
    vec![game("GTA 5", 9), game("LoL", 7), game("GTA 4", 8)]
}

/// Repository whose every call fails with a connection error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRepository;

fn unreachable_store() -> RepositoryError {
    RepositoryError::connection("store unreachable")
}

#[async_trait]
impl GameRepository for FailingRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Err(unreachable_store())
    }

    async fn get_games(&self) -> RepositoryResult<Vec<Game>> {
        Err(unreachable_store())
    }

    async fn get_game(&self, _id: GameId) -> RepositoryResult<Option<Game>> {
        Err(unreachable_store())
    }

    async fn create_game(&self, _game: &Game) -> RepositoryResult<()> {
        Err(unreachable_store())
    }

    async fn update_game(&self, _game: &Game) -> RepositoryResult<()> {
        Err(unreachable_store())
    }

    async fn delete_game(&self, _id: GameId) -> RepositoryResult<()> {
        Err(unreachable_store())
    }

    async fn search_games(&self, _name: &str) -> RepositoryResult<Vec<Game>> {
        Err(unreachable_store())
    }
}
