//! Error types for port operations.

/// Store operation errors with context for debugging.
///
/// Use cases pass these through untouched: retry and backoff belong to the
/// adapter that raised them.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A versioned write lost the race against a concurrent writer.
    #[error("Concurrent modification of {entity_type} {id}")]
    Conflict {
        entity_type: &'static str,
        id: String,
    },
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create a Conflict error with entity type and ID context.
    pub fn conflict(entity_type: &'static str, id: impl ToString) -> Self {
        Self::Conflict {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Check if this is a Conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// Build cache failures. Never fatal to the caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    #[error("Build cache unavailable: {0}")]
    Unavailable(String),
}
