//! Core data structures for CovOxide
//!
//! This module provides the columnar containers that feed statistical models,
//! together with the column-access interface the models are written against.

mod builder;
mod dataframe;
mod series;
mod traits;
mod utils;

#[cfg(test)]
mod tests;

// Re-exports
pub use builder::DataFrameBuilder;
pub use dataframe::DataFrame;
pub use series::{Series, SeriesValue};
pub use traits::ColumnSource;
pub use utils::{ColumnType, unique_values};

// Type aliases for common use cases
pub type FloatArray = ndarray::Array1<f64>;
pub type IntArray = ndarray::Array1<i64>;
pub type BoolArray = ndarray::Array1<bool>;
pub type StringArray = Vec<String>;

/// Error types specific to data operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Column '{column}' has type {actual}, but {expected} was expected")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Operation requires numeric data, got {0}")]
    NonNumericData(&'static str),
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
