//! Catalog policy services.
//!
//! Pluggable rules consulted by the catalog operations in `db::services`:
//! input validation and the search-miss policy.

pub mod policy;
pub mod validation;

pub use policy::{CatalogPolicy, SearchMissPolicy};
pub use validation::{AcceptAll, AllOf, GameValidator, GradeRange, RequireNonEmpty, ValidationError};
