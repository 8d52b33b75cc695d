//! Custom error types for Outlay
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The query engine itself is total and never
//! fails; these errors cover the CLI boundary, where user-supplied text has to
//! be turned into concrete dates and categories before the core is invoked.

use thiserror::Error;

/// The main error type for Outlay operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Validation errors for new-expense input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date argument that could not be parsed
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A category name that is not part of the closed set, in a context
    /// where a concrete category is required (e.g. `add`)
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl ExpenseError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for Outlay operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::validation("amount must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Validation error: amount must be greater than zero"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ExpenseError::InvalidDate("2025-13-40".into());
        assert_eq!(err.to_string(), "Invalid date '2025-13-40': expected YYYY-MM-DD");
    }

    #[test]
    fn test_unknown_category_display() {
        let err = ExpenseError::UnknownCategory("Groceries".into());
        assert_eq!(err.to_string(), "Unknown category: Groceries");
        assert!(!err.is_validation());
    }
}
