//! Linear models and analysis of covariance for CovOxide
//!
//! ```no_run
//! use co_core::data::{DataFrameBuilder, Series};
//! use co_models::ancova;
//!
//! let df = DataFrameBuilder::new()
//!     .with_column("group", Series::categorical(&["A", "A", "A", "B", "B", "B"]))?
//!     .with_column("age", Series::float(vec![20.0, 22.0, 21.0, 30.0, 32.0, 31.0]))?
//!     .with_column("outcome", Series::float(vec![50.0, 52.0, 51.0, 65.0, 67.0, 66.0]))?
//!     .build()?;
//!
//! let result = ancova(&df, "outcome", "group", &["age"])?;
//! println!("{}", result);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ancova;
pub mod base;
pub mod design;
pub mod error;
pub mod lm;
pub mod provider;

pub use ancova::{
    ancova, AdjustedMean, Ancova, AncovaConfig, AncovaResult, CategoricalEncoder, GroupLevels,
    NestedModelComparator, PartialFTest,
};
pub use base::{Coefficient, ModelStatistics, ModelSummary, ResidualStatistics, Result};
pub use design::{DesignMatrix, DesignMatrixBuilder};
pub use error::ModelError;
pub use lm::{lm, FittedModel, LinearConfig, OrdinaryLeastSquares};
pub use provider::{LapackStatistics, StatisticsProvider};
