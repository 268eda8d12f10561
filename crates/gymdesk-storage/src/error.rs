use thiserror::Error;

/// Storage-specific error types for the gymdesk management system.
///
/// Lookups signal absence with `Ok(None)`; everything here is a real
/// failure with a distinct cause, so callers can tell "row does not exist"
/// apart from "database unreachable" and "constraint violated".
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database connection or query execution failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration execution failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Entity not found in database
    #[error("Entity not found: {entity_type} with {field}={value}")]
    NotFound {
        entity_type: String,
        field: String,
        value: String,
    },

    /// Unique constraint violation
    #[error("Conflict: {entity_type} with {field}={value} already exists")]
    Conflict {
        entity_type: String,
        field: String,
        value: String,
    },

    /// Referential integrity violation
    #[error("Referential integrity error: {0}")]
    ReferentialIntegrity(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StorageError {
    /// Classify an sqlx error raised by an insert or update.
    ///
    /// Unique-index and foreign-key violations get their own variants so
    /// service code can react to them without string-matching driver
    /// messages; everything else stays a plain database error.
    pub fn from_write(err: sqlx::Error, entity_type: &str, field: &str, value: &str) -> Self {
        let violation = err
            .as_database_error()
            .map(|db| (db.is_unique_violation(), db.is_foreign_key_violation()));

        match violation {
            Some((true, _)) => StorageError::Conflict {
                entity_type: entity_type.to_string(),
                field: field.to_string(),
                value: value.to_string(),
            },
            Some((_, true)) => StorageError::ReferentialIntegrity(format!(
                "{entity_type} references a missing row ({field}={value})"
            )),
            _ => StorageError::Database(err),
        }
    }

    /// True if this error is a unique constraint conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::Conflict { .. })
    }

    /// True if this error is a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

/// Specialized result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
