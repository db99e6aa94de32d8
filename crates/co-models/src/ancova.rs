//! Analysis of covariance
//!
//! Tests whether a grouping factor explains variation in a numeric outcome
//! beyond what a set of numeric covariates already explains:
//!
//! 1. the factor is treatment-coded against its first level in sort order,
//! 2. `y ~ covariates` and `y ~ covariates + indicators` are fitted by OLS,
//! 3. the two residual sums of squares are compared with a partial F-test.

pub mod comparison;
pub mod encoder;
pub mod model;
pub mod result;


pub use comparison::{NestedModelComparator, PartialFTest};
pub use encoder::{CategoricalEncoder, EncodedFactor, GroupLevels};
pub use model::Ancova;
pub use result::{AdjustedMean, AncovaResult};

use co_core::data::ColumnSource;
use serde::{Deserialize, Serialize};

use crate::base::Result;
use crate::lm::LinearConfig;

/// ANCOVA configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AncovaConfig {
    /// Settings for both OLS fits
    pub linear: LinearConfig,
}

impl AncovaConfig {
    /// Check the settings before any fitting
    pub fn validate(&self) -> Result<()> {
        self.linear.validate()
    }
}

/// Convenience function for a one-factor ANCOVA with default settings
pub fn ancova<S, C>(
    data: &S,
    dependent: &str,
    group: &str,
    covariates: &[C],
) -> Result<AncovaResult>
where
    S: ColumnSource + ?Sized,
    C: AsRef<str>,
{
    Ancova::new(dependent, group).covariates(covariates).fit(data)
}
