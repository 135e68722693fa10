//! Postgres repository implementation using Diesel.
//!
//! - r2d2 connection pool sized from [`PostgresConfig`]
//! - embedded migrations applied when the repository is created
//! - every query runs on tokio's blocking pool
//! - retryable failures are replayed with exponential backoff

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::api::{Game, GameId};
use crate::db::config::PostgresConfig;
use crate::db::repository::{ErrorContext, GameRepository, RepositoryError, RepositoryResult};

mod models;
mod schema;

use models::GameRow;
use schema::games;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Pool occupancy and query counters.
#[derive(Debug, Clone, Default)]
pub struct PoolStats {
    pub connections_in_use: u32,
    pub idle_connections: u32,
    pub total_connections: u32,
    pub max_size: u32,
    /// Queries that reached the database, including failed attempts
    pub total_queries: u64,
    /// Operations that gave up with an error
    pub failed_queries: u64,
    /// Extra attempts made after a retryable failure
    pub retried_operations: u64,
}

#[derive(Debug, Default)]
struct QueryCounters {
    total: AtomicU64,
    failed: AtomicU64,
    retried: AtomicU64,
}

impl QueryCounters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Doubling delay between attempts, bounded by `max_retries`.
#[derive(Debug, Clone, Copy)]
struct Backoff {
    max_retries: u32,
    first_delay: Duration,
}

impl Backoff {
    fn delay_before(&self, attempt: u32) -> Duration {
        self.first_delay
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

/// Diesel-backed game repository for Postgres.
#[derive(Clone, Debug)]
pub struct PostgresRepository {
    pool: PgPool,
    max_pool_size: u32,
    backoff: Backoff,
    counters: Arc<QueryCounters>,
}

impl PostgresRepository {
    /// Build the pool and apply pending migrations.
    ///
    /// Blocks on the network; call it from a blocking context.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection(e.to_string()).with_context(
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        let mut conn = pool.get().map_err(|e| {
            RepositoryError::from(e).with_operation("migrate")
        })?;
        conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal(format!("migration failed: {}", e))
                .with_context(ErrorContext::new("migrate"))
        })?;
        drop(conn);

        info!(max_pool_size = config.max_pool_size, "Postgres pool ready");

        Ok(Self {
            pool,
            max_pool_size: config.max_pool_size,
            backoff: Backoff {
                max_retries: config.max_retries,
                first_delay: Duration::from_millis(config.retry_delay_ms),
            },
            counters: Arc::new(QueryCounters::default()),
        })
    }

    /// Run `query` on a pooled connection inside `spawn_blocking`, replaying
    /// it while it fails with a retryable error and attempts remain.
    async fn run<T, F>(&self, operation: &'static str, query: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: Fn(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        let backoff = self.backoff;
        let counters = Arc::clone(&self.counters);

        tokio::task::spawn_blocking(move || {
            let mut attempt = 0;
            loop {
                if attempt > 0 {
                    QueryCounters::bump(&counters.retried);
                    warn!(operation, attempt, "retrying Postgres operation");
                    std::thread::sleep(backoff.delay_before(attempt));
                }

                let outcome = pool
                    .get()
                    .map_err(RepositoryError::from)
                    .and_then(|mut conn| {
                        QueryCounters::bump(&counters.total);
                        query(&mut conn)
                    });

                match outcome {
                    Ok(value) => return Ok(value),
                    Err(err) if err.is_retryable() && attempt < backoff.max_retries => {
                        attempt += 1;
                    }
                    Err(err) => {
                        QueryCounters::bump(&counters.failed);
                        return Err(err.with_operation(operation));
                    }
                }
            }
        })
        .await
        .map_err(|e| {
            RepositoryError::internal(format!("blocking task failed: {}", e))
                .with_context(ErrorContext::new(operation))
        })?
    }

    /// Pool occupancy plus query counters.
    pub fn get_pool_stats(&self) -> PoolStats {
        let state = self.pool.state();
        PoolStats {
            connections_in_use: state.connections - state.idle_connections,
            idle_connections: state.idle_connections,
            total_connections: state.connections,
            max_size: self.max_pool_size,
            total_queries: self.counters.total.load(Ordering::Relaxed),
            failed_queries: self.counters.failed.load(Ordering::Relaxed),
            retried_operations: self.counters.retried.load(Ordering::Relaxed),
        }
    }
}

/// Build an `ILIKE` pattern matching `name` as a literal substring.
fn like_pattern(name: &str) -> String {
    let mut pattern = String::with_capacity(name.len() + 2);
    pattern.push('%');
    for ch in name.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl GameRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.run("health_check", |conn| {
            diesel::sql_query("SELECT 1").execute(conn)?;
            Ok(true)
        })
        .await
    }

    async fn get_games(&self) -> RepositoryResult<Vec<Game>> {
        self.run("get_games", |conn| {
            let rows: Vec<GameRow> = games::table.select(GameRow::as_select()).load(conn)?;
            Ok(rows.into_iter().map(Game::from).collect())
        })
        .await
    }

    async fn get_game(&self, id: GameId) -> RepositoryResult<Option<Game>> {
        self.run("get_game", move |conn| {
            let row: Option<GameRow> = games::table
                .find(id.value())
                .select(GameRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Game::from))
        })
        .await
    }

    async fn create_game(&self, game: &Game) -> RepositoryResult<()> {
        let row = GameRow::from(game);
        let id = game.id;
        self.run("create_game", move |conn| {
            diesel::insert_into(games::table)
                .values(&row)
                .execute(conn)
                .map_err(|e| match RepositoryError::from(e) {
                    RepositoryError::Conflict { .. } => {
                        RepositoryError::duplicate_game("create_game", id)
                    }
                    other => other.for_game(id),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_game(&self, game: &Game) -> RepositoryResult<()> {
        let row = GameRow::from(game);
        let id = game.id;
        self.run("update_game", move |conn| {
            let affected = diesel::update(games::table.find(row.id))
                .set(&row)
                .execute(conn)
                .map_err(|e| RepositoryError::from(e).for_game(id))?;
            if affected == 0 {
                return Err(RepositoryError::game_not_found("update_game", id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_game(&self, id: GameId) -> RepositoryResult<()> {
        self.run("delete_game", move |conn| {
            let affected = diesel::delete(games::table.find(id.value()))
                .execute(conn)
                .map_err(|e| RepositoryError::from(e).for_game(id))?;
            if affected == 0 {
                return Err(RepositoryError::game_not_found("delete_game", id));
            }
            Ok(())
        })
        .await
    }

    async fn search_games(&self, name: &str) -> RepositoryResult<Vec<Game>> {
        let pattern = like_pattern(name);
        self.run("search_games", move |conn| {
            let rows: Vec<GameRow> = games::table
                .filter(games::name.ilike(pattern.as_str()))
                .order(games::name.asc())
                .select(GameRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(Game::from).collect())
        })
        .await
    }
}
