//! Catalog request policy: the validation hook and the search-miss rule.

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use super::validation::{AcceptAll, AllOf, GameValidator, GradeRange, RequireNonEmpty};

/// What a name search answers when the store reports no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMissPolicy {
    /// Answer "not found" (HTTP 404). Historical behavior.
    #[default]
    NotFound,
    /// Answer with an empty list (HTTP 200), like the list endpoint.
    EmptyOk,
}

impl FromStr for SearchMissPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_found" | "404" => Ok(Self::NotFound),
            "empty" | "empty_ok" | "200" => Ok(Self::EmptyOk),
            _ => Err(format!("Unknown search miss policy: {}", s)),
        }
    }
}

/// Policy shared by every catalog request.
#[derive(Debug, Clone)]
pub struct CatalogPolicy {
    pub validator: Arc<dyn GameValidator>,
    pub search_miss: SearchMissPolicy,
}

impl Default for CatalogPolicy {
    fn default() -> Self {
        Self {
            validator: Arc::new(AcceptAll),
            search_miss: SearchMissPolicy::default(),
        }
    }
}

impl CatalogPolicy {
    pub fn with_validator(mut self, validator: impl GameValidator + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    pub fn with_search_miss(mut self, search_miss: SearchMissPolicy) -> Self {
        self.search_miss = search_miss;
        self
    }

    /// Build the policy from environment variables.
    ///
    /// # Environment Variables
    /// - `CATALOG_SEARCH_MISS`: `not_found` (default) or `empty`
    /// - `CATALOG_GRADE_MIN` / `CATALOG_GRADE_MAX`: inclusive grade bounds;
    ///   either one enables the range check, the other defaults to the `i32` limit
    /// - `CATALOG_REQUIRE_NAME`: `true` rejects blank names and descriptions
    ///
    /// With none of them set the policy accepts every input.
    pub fn from_env() -> Result<Self, String> {
        let search_miss = match env::var("CATALOG_SEARCH_MISS") {
            Ok(value) => value.parse()?,
            Err(_) => SearchMissPolicy::default(),
        };

        let grade_min = parse_optional::<i32>("CATALOG_GRADE_MIN")?;
        let grade_max = parse_optional::<i32>("CATALOG_GRADE_MAX")?;
        let require_name = parse_optional::<bool>("CATALOG_REQUIRE_NAME")?.unwrap_or(false);

        let mut validators = AllOf::default();
        if require_name {
            validators.push(RequireNonEmpty);
        }
        if grade_min.is_some() || grade_max.is_some() {
            let range = GradeRange {
                min: grade_min.unwrap_or(i32::MIN),
                max: grade_max.unwrap_or(i32::MAX),
            };
            if range.min > range.max {
                return Err(format!(
                    "CATALOG_GRADE_MIN ({}) must not exceed CATALOG_GRADE_MAX ({})",
                    range.min, range.max
                ));
            }
            validators.push(range);
        }

        let validator: Arc<dyn GameValidator> = if validators.is_empty() {
            Arc::new(AcceptAll)
        } else {
            Arc::new(validators)
        };

        Ok(Self {
            validator,
            search_miss,
        })
    }
}

fn parse_optional<T: FromStr>(key: &str) -> Result<Option<T>, String> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("{} has an invalid value: {}", key, value)),
        Err(_) => Ok(None),
    }
}
