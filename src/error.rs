//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed (connectivity, constraint, SQL)
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Input rejected before reaching the database
    #[error("Validation error: {0}")]
    Validation(String),

    /// A controller or DAO was used before its collaborators were set
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a precondition error with message
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Create a config error with message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from the data access layer.
    pub fn is_data_access(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    /// Whether this error signals a programming defect rather than bad input.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_message_preserved() {
        let err = AppError::from(sea_orm::DbErr::Custom("UNIQUE constraint failed".to_string()));
        assert!(err.is_data_access());
        assert!(err.to_string().contains("UNIQUE constraint failed"));
    }

    #[test]
    fn test_precondition_kind() {
        let err = AppError::precondition("Entity was not set");
        assert!(err.is_precondition());
        assert!(!err.is_data_access());
    }
}
