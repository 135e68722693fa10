//! Error types for repository operations.
//!
//! Every variant carries an [`ErrorContext`] naming the catalog operation and,
//! when known, the game it was working on. Logs and HTTP error bodies render
//! the context verbatim.

use std::fmt;

use crate::api::GameId;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Where a repository failure happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Catalog or backend operation, e.g. `"get_game"` or `"create_pool"`
    pub operation: Option<&'static str>,
    /// Game the operation targeted
    pub game_id: Option<GameId>,
    /// Free-form detail such as the search text or the database error kind
    pub details: Option<String>,
    /// Whether repeating the operation may succeed
    pub retryable: bool,
}

impl ErrorContext {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation: Some(operation),
            ..Default::default()
        }
    }

    pub fn for_game(mut self, id: GameId) -> Self {
        self.game_id = Some(id);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<String> = Vec::with_capacity(4);
        if let Some(op) = self.operation {
            fields.push(format!("op={}", op));
        }
        if let Some(id) = self.game_id {
            fields.push(format!("game={}", id));
        }
        if let Some(details) = &self.details {
            fields.push(details.clone());
        }
        if self.retryable {
            fields.push("retryable".to_string());
        }
        write!(f, "[{}]", fields.join(" "))
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not be reached. Always retryable.
    #[error("connection error: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    /// The store rejected or failed a query.
    #[error("query error: {message} {context}")]
    QueryError {
        message: String,
        context: ErrorContext,
    },

    /// No game with the requested id (or no search result).
    #[error("not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// A game with the same id is already stored.
    #[error("conflict: {message} {context}")]
    Conflict {
        message: String,
        context: ErrorContext,
    },

    /// Input rejected by the catalog validation hook.
    #[error("invalid input: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },

    /// Backend selection or connection settings are unusable.
    #[error("configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    #[error("internal error: {message} {context}")]
    InternalError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: ErrorContext::default().retryable(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::QueryError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// `NotFound` for a game id, shared by every backend and the catalog layer.
    pub fn game_not_found(operation: &'static str, id: GameId) -> Self {
        Self::not_found(format!("game {} does not exist", id))
            .with_context(ErrorContext::new(operation).for_game(id))
    }

    /// `Conflict` for an id that is already stored.
    pub fn duplicate_game(operation: &'static str, id: GameId) -> Self {
        Self::conflict(format!("game {} already exists", id))
            .with_context(ErrorContext::new(operation).for_game(id))
    }

    /// Replace the context. Connection errors stay retryable.
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        let keep_retryable = matches!(self, Self::ConnectionError { .. });
        let slot = self.context_mut();
        *slot = context;
        if keep_retryable {
            slot.retryable = true;
        }
        self
    }

    /// Set the operation, keeping the rest of the context.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.context_mut().operation = Some(operation);
        self
    }

    /// Attach the targeted game, keeping the rest of the context.
    pub fn for_game(mut self, id: GameId) -> Self {
        self.context_mut().game_id = Some(id);
        self
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionError { .. } => true,
            Self::QueryError { context, .. } => context.retryable,
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn context(&self) -> &ErrorContext {
        self.parts().1
    }

    /// The bare message without the context suffix.
    pub fn message(&self) -> &str {
        self.parts().0
    }

    fn parts(&self) -> (&str, &ErrorContext) {
        match self {
            Self::ConnectionError { message, context }
            | Self::QueryError { message, context }
            | Self::NotFound { message, context }
            | Self::Conflict { message, context }
            | Self::ValidationError { message, context }
            | Self::ConfigurationError { message, context }
            | Self::InternalError { message, context } => (message, context),
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::ConnectionError { context, .. }
            | Self::QueryError { context, .. }
            | Self::NotFound { context, .. }
            | Self::Conflict { context, .. }
            | Self::ValidationError { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::InternalError { context, .. } => context,
        }
    }
}

#[cfg(feature = "postgres-repo")]
impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::NotFound => Self::not_found("no matching row"),
            Error::DatabaseError(kind, info) => {
                let context = ErrorContext::default().with_details(format!("kind={:?}", kind));
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation => {
                        Self::conflict(message).with_context(context)
                    }
                    // Postgres aborts one side of a write race; replaying it succeeds.
                    DatabaseErrorKind::SerializationFailure => {
                        Self::query(message).with_context(context.retryable())
                    }
                    _ => Self::query(message).with_context(context),
                }
            }
            Error::DeserializationError(e) | Error::SerializationError(e) => {
                Self::internal(format!("row conversion failed: {}", e))
            }
            other => Self::query(other.to_string()),
        }
    }
}

#[cfg(feature = "postgres-repo")]
impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        Self::connection(err.to_string())
            .with_context(ErrorContext::new("checkout").with_details("pool exhausted or unreachable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_is_retryable() {
        assert!(RepositoryError::connection("down").is_retryable());
        assert!(!RepositoryError::query("bad sql").is_retryable());
        assert!(!RepositoryError::not_found("gone").is_retryable());
    }

    #[test]
    fn test_with_context_keeps_connection_retryable() {
        let err = RepositoryError::connection("refused").with_context(ErrorContext::new("get_games"));
        assert!(err.is_retryable());
        assert!(err.context().retryable);
        assert_eq!(err.context().operation, Some("get_games"));
    }

    #[test]
    fn test_game_not_found_carries_id() {
        let id = GameId::generate();
        let err = RepositoryError::game_not_found("get_game", id);
        assert!(err.is_not_found());
        assert_eq!(err.context().game_id, Some(id));
        assert_eq!(err.message(), format!("game {} does not exist", id));
    }
}
