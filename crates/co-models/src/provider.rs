//! Statistics and linear-algebra primitives used by the models
//!
//! Fitting code never calls LAPACK or a distribution library directly. It
//! goes through a [`StatisticsProvider`] that is bound once, before any
//! analysis starts, and is then used synchronously.

use ndarray_linalg::{Determinant, Inverse};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::base::{Matrix, ModelError, Result};

/// Dense linear algebra and distribution functions
pub trait StatisticsProvider: Send + Sync {
    /// Determinant of a square matrix
    fn determinant(&self, matrix: &Matrix) -> Result<f64>;

    /// Inverse of a square, non-singular matrix
    fn inverse(&self, matrix: &Matrix) -> Result<Matrix>;

    /// CDF of Student's t distribution with `df` degrees of freedom
    fn students_t_cdf(&self, x: f64, df: f64) -> Result<f64>;

    /// Quantile function of Student's t distribution
    fn students_t_quantile(&self, p: f64, df: f64) -> Result<f64>;

    /// CDF of the F distribution with (`df1`, `df2`) degrees of freedom
    fn fisher_f_cdf(&self, x: f64, df1: f64, df2: f64) -> Result<f64>;
}

/// Default provider: LAPACK through `ndarray-linalg`, distributions from `statrs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LapackStatistics;

impl LapackStatistics {
    fn students_t(df: f64, operation: &str) -> Result<StudentsT> {
        StudentsT::new(0.0, 1.0, df).map_err(|e| {
            ModelError::numerical(format!("Failed to create t-distribution: {}", e), operation)
        })
    }
}

impl StatisticsProvider for LapackStatistics {
    fn determinant(&self, matrix: &Matrix) -> Result<f64> {
        // an exactly zero pivot comes back as a zero determinant, not an error
        matrix.det().map_err(|e| {
            ModelError::numerical(format!("Failed to compute determinant: {}", e), "determinant")
        })
    }

    fn inverse(&self, matrix: &Matrix) -> Result<Matrix> {
        matrix.inv().map_err(|e| {
            ModelError::numerical(format!("Failed to invert matrix: {}", e), "inverse")
        })
    }

    fn students_t_cdf(&self, x: f64, df: f64) -> Result<f64> {
        Ok(Self::students_t(df, "students_t_cdf")?.cdf(x))
    }

    fn students_t_quantile(&self, p: f64, df: f64) -> Result<f64> {
        Ok(Self::students_t(df, "students_t_quantile")?.inverse_cdf(p))
    }

    fn fisher_f_cdf(&self, x: f64, df1: f64, df2: f64) -> Result<f64> {
        let f_dist = FisherSnedecor::new(df1, df2).map_err(|e| {
            ModelError::numerical(
                format!("Failed to create F-distribution: {}", e),
                "fisher_f_cdf",
            )
        })?;
        Ok(f_dist.cdf(x))
    }
}
