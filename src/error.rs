//! Error types for the fairsight crate

use thiserror::Error;

/// Result type alias for fairsight operations
pub type Result<T> = std::result::Result<T, FairsightError>;

/// Main error type for the fairsight crate
#[derive(Error, Debug)]
pub enum FairsightError {
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Column '{column}' has {actual} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Nothing to render: {0}")]
    EmptyInput(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FairsightError::ModelNotFound("credit_gbm".to_string());
        assert_eq!(err.to_string(), "Model not found: credit_gbm");
    }

    #[test]
    fn test_column_length_display() {
        let err = FairsightError::ColumnLength {
            column: "Group burden male".to_string(),
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Column 'Group burden male' has 3 values, expected 2"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FairsightError = io_err.into();
        assert!(matches!(err, FairsightError::Io(_)));
    }
}
