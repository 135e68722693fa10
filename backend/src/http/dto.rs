//! Data Transfer Objects for the HTTP API.
//!
//! The game read/write shapes live in `crate::api` and are re-exported here;
//! this module adds the HTTP-only query and status shapes.

use serde::{Deserialize, Serialize};

pub use crate::api::{CreateGameDto, GameDto, UpdateGameDto};

/// Query parameters for `GET /game`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListGamesQuery {
    /// Case-insensitive substring filter on the game name (optional)
    #[serde(default)]
    pub name: Option<String>,
}

/// Query parameters for `GET /game/search`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    /// Name fragment forwarded to the store-side search. Missing means "".
    #[serde(default)]
    pub name: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
