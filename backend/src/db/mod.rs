//! Game storage: the catalog operations and the backends behind them.
//!
//! Handlers never touch a backend directly; they call [`services`], which
//! talks to whichever [`GameRepository`] was built at start-up.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Catalog operations (services.rs)                       │
//! │  - Name filtering and search-miss policy                │
//! │  - Validation hook                                      │
//! │  - Not-found semantics and logging                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  GameRepository trait (repository/)                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │ LocalRepository  (in-memory) │
//!     │ PostgresRepository (Diesel)  │
//!     └──────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! Build the repository once at start-up and pass it down explicitly:
//! ```ignore
//! use game_catalog::db::{services, RepositoryBuilder};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryBuilder::new().from_env()?.build().await?;
//!     let games = services::list_games(repo.as_ref(), None).await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod config;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use config::{DatabaseSettings, PostgresConfig};
pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::{PoolStats, PostgresRepository};
pub use repository::{ErrorContext, GameRepository, RepositoryError, RepositoryResult};
