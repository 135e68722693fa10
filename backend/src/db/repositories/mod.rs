//! `GameRepository` backends.
//!
//! [`LocalRepository`] is always compiled; [`PostgresRepository`] needs the
//! `postgres-repo` feature.

pub mod local;
#[cfg(feature = "postgres-repo")]
pub mod postgres;

pub use local::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use postgres::{PoolStats, PostgresRepository};
