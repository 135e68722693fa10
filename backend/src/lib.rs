//! # Game Catalog Backend
//!
//! A small REST catalog of games: create, read, update, delete and search
//! over a single `Game` entity.
//!
//! ## Architecture
//!
//! - [`api`]: Domain entity and the DTOs exchanged with clients
//! - [`db`]: Repository trait, backends, configuration and catalog operations
//! - [`services`]: Validation hook and search-miss policy
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The local (in-memory) backend is always available; the Postgres backend
//! is enabled with the `postgres-repo` feature.

pub mod api;

pub mod db;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
