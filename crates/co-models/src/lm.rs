//! Linear regression models
//!
//! Ordinary least squares via the normal equations. The Gram matrix `X'X` is
//! checked for singularity before it is inverted, and all inference comes from
//! its inverse.

pub mod ols;
pub mod result;


pub use ols::OrdinaryLeastSquares;
pub use result::FittedModel;

use co_core::data::ColumnSource;
use serde::{Deserialize, Serialize};

use crate::base::{ModelError, Result};
use crate::design::DesignMatrixBuilder;
use crate::provider::LapackStatistics;

/// Linear model configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearConfig {
    /// Smallest accepted `|det(X'X)|`
    pub singular_tolerance: f64,
    /// Confidence level for intervals
    pub confidence_level: f64,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            singular_tolerance: 1e-12,
            confidence_level: 0.95,
        }
    }
}

impl LinearConfig {
    /// Check the configuration before any fitting
    pub fn validate(&self) -> Result<()> {
        if !(self.singular_tolerance.is_finite() && self.singular_tolerance > 0.0) {
            return Err(ModelError::InvalidConfig {
                message: format!(
                    "singular_tolerance must be finite and positive, got {}",
                    self.singular_tolerance
                ),
            });
        }

        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ModelError::InvalidConfig {
                message: format!(
                    "confidence_level must lie in (0, 1), got {}",
                    self.confidence_level
                ),
            });
        }

        Ok(())
    }
}

/// Convenience function for OLS regression with an intercept
pub fn lm<S, C>(data: &S, response: &str, predictors: &[C]) -> Result<FittedModel>
where
    S: ColumnSource + ?Sized,
    C: AsRef<str>,
{
    let design = DesignMatrixBuilder::new(data).build(predictors, response)?;
    OrdinaryLeastSquares::new(&LapackStatistics).fit(&design)
}
