//! Model-related error types

use thiserror::Error;

use co_core::data::DataError;

/// Model-related errors
///
/// Every variant names the column, matrix or statistic it is about. Errors
/// abort the analysis that raised them; nothing is retried.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Data-related error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Invalid or inconsistent input columns
    #[error("Validation error for '{column}': {message}")]
    Validation {
        /// Offending column (or variable role)
        column: String,
        /// What was wrong with it
        message: String,
    },

    /// Gram matrix too close to singular to invert
    #[error(
        "Singular matrix: |det({matrix})| = {determinant:e} is below tolerance {tolerance:e}; \
         the design has collinear or redundant predictors"
    )]
    SingularMatrix {
        /// Matrix that failed the check
        matrix: String,
        /// Computed determinant
        determinant: f64,
        /// Tolerance it was compared against
        tolerance: f64,
    },

    /// No residual degrees of freedom left
    #[error(
        "No residual degrees of freedom in {model}: {n_samples} samples for {n_params} parameters"
    )]
    DegreesOfFreedom {
        /// Model being fitted
        model: String,
        /// Number of samples
        n_samples: usize,
        /// Number of estimated parameters
        n_params: usize,
    },

    /// Invalid nested-model comparison
    #[error("Invalid comparison ({statistic}): {message}")]
    Comparison {
        /// Statistic or parameter at fault
        statistic: String,
        /// Error message
        message: String,
    },

    /// Numerical computation error
    #[error("Numerical error: {message} (operation: {operation})")]
    NumericalError {
        /// Error message
        message: String,
        /// Operation that failed
        operation: String,
    },

    /// Invalid model configuration
    #[error("Invalid model configuration: {message}")]
    InvalidConfig {
        /// Configuration error message
        message: String,
    },
}

impl ModelError {
    pub(crate) fn validation(column: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::Validation {
            column: column.into(),
            message: message.into(),
        }
    }

    pub(crate) fn numerical(message: impl Into<String>, operation: impl Into<String>) -> Self {
        ModelError::NumericalError {
            message: message.into(),
            operation: operation.into(),
        }
    }

    pub(crate) fn comparison(statistic: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::Comparison {
            statistic: statistic.into(),
            message: message.into(),
        }
    }
}
