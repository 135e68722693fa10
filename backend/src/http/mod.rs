//! REST surface of the catalog (feature `http-server`).
//!
//! - [`router`]: routes under `/game` plus `/health`, and the middleware stack
//! - [`handlers`]: one async fn per route; status codes and headers only
//! - [`state`]: repository handle and catalog policy shared by all handlers
//! - [`dto`]: query-string and health shapes
//! - [`error`]: `RepositoryError` to status code and JSON body
//!
//! Request semantics live in [`crate::db::services`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
