//! Input validation hook for create and update requests.
//!
//! The catalog does not define valid ranges on its own. [`AcceptAll`] keeps
//! the historical behavior; deployments opt into checks by composing the
//! other validators.

use std::fmt;

use crate::api::GameFields;

/// A rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Hook consulted before a game is created or overwritten.
pub trait GameValidator: Send + Sync + fmt::Debug {
    fn validate(&self, fields: &GameFields<'_>) -> Result<(), ValidationError>;
}

/// Accepts every input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl GameValidator for AcceptAll {
    fn validate(&self, _fields: &GameFields<'_>) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Rejects grades outside an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeRange {
    pub min: i32,
    pub max: i32,
}

impl GameValidator for GradeRange {
    fn validate(&self, fields: &GameFields<'_>) -> Result<(), ValidationError> {
        if fields.grade < self.min || fields.grade > self.max {
            return Err(ValidationError::new(
                "grade",
                format!(
                    "{} is outside the allowed range {}..={}",
                    fields.grade, self.min, self.max
                ),
            ));
        }
        Ok(())
    }
}

/// Rejects blank names and descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireNonEmpty;

impl GameValidator for RequireNonEmpty {
    fn validate(&self, fields: &GameFields<'_>) -> Result<(), ValidationError> {
        if fields.name.trim().is_empty() {
            return Err(ValidationError::new("name", "must not be empty"));
        }
        if fields.description.trim().is_empty() {
            return Err(ValidationError::new("description", "must not be empty"));
        }
        Ok(())
    }
}

/// Runs several validators in order, stopping at the first rejection.
#[derive(Debug, Default)]
pub struct AllOf(pub Vec<Box<dyn GameValidator>>);

impl AllOf {
    pub fn push(&mut self, validator: impl GameValidator + 'static) {
        self.0.push(Box::new(validator));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl GameValidator for AllOf {
    fn validate(&self, fields: &GameFields<'_>) -> Result<(), ValidationError> {
        self.0.iter().try_for_each(|v| v.validate(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &'static str, description: &'static str, grade: i32) -> GameFields<'static> {
        GameFields {
            name,
            description,
            grade,
            image: "",
        }
    }

    #[test]
    fn test_accept_all_accepts_anything() {
        assert!(AcceptAll.validate(&fields("", "", i32::MIN)).is_ok());
    }

    #[test]
    fn test_grade_range_bounds_are_inclusive() {
        let range = GradeRange { min: 1, max: 10 };
        assert!(range.validate(&fields("a", "b", 1)).is_ok());
        assert!(range.validate(&fields("a", "b", 10)).is_ok());

        let err = range.validate(&fields("a", "b", 11)).unwrap_err();
        assert_eq!(err.field, "grade");
        assert!(range.validate(&fields("a", "b", 0)).is_err());
    }

    #[test]
    fn test_require_non_empty() {
        assert!(RequireNonEmpty.validate(&fields("Doom", "shooter", 0)).is_ok());
        assert_eq!(
            RequireNonEmpty
                .validate(&fields("   ", "shooter", 0))
                .unwrap_err()
                .field,
            "name"
        );
        assert_eq!(
            RequireNonEmpty
                .validate(&fields("Doom", "", 0))
                .unwrap_err()
                .field,
            "description"
        );
    }

    #[test]
    fn test_all_of_stops_at_first_rejection() {
        let mut all = AllOf::default();
        assert!(all.is_empty());
        all.push(RequireNonEmpty);
        all.push(GradeRange { min: 0, max: 5 });

        assert!(all.validate(&fields("x", "y", 3)).is_ok());
        assert_eq!(all.validate(&fields("", "y", 9)).unwrap_err().field, "name");
        assert_eq!(all.validate(&fields("x", "y", 9)).unwrap_err().field, "grade");
    }
}
