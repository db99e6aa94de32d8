//! Core types shared by the models
//!
//! Coefficient tables, fit statistics and printable summaries live here so
//! that the linear fitter and the ANCOVA layer report results the same way.

use ndarray::{Array1, Array2};

// Re-export core types
pub use coefficient::Coefficient;
pub use statistics::ModelStatistics;
pub use statistics::ResidualStatistics;
pub use summary::ModelSummary;

pub use crate::error::ModelError;

pub mod coefficient;
pub mod statistics;
pub mod summary;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Dense matrix, row-major (standard layout)
pub type Matrix = Array2<f64>;

/// Dense vector
pub type Vector = Array1<f64>;
