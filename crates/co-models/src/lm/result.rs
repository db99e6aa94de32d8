//! Linear regression result structure
//!
//! A [`FittedModel`] holds everything the OLS fit produced. It is built once by
//! [`OrdinaryLeastSquares`](super::OrdinaryLeastSquares) and only read after.

use serde::Serialize;
use std::fmt;

use crate::base::{
    Coefficient, Matrix, ModelError, ModelStatistics, ModelSummary, ResidualStatistics, Result,
    Vector,
};
use crate::design::INTERCEPT;

/// OLS linear regression result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedModel {
    /// Model formula
    pub formula: String,
    /// Variable names, one per coefficient
    pub variable_names: Vec<String>,
    /// Coefficients (β)
    pub coefficients: Vector,
    /// Standard errors of coefficients
    pub standard_errors: Vector,
    /// t-statistics for coefficients
    pub t_statistics: Vector,
    /// Two-sided p-values for coefficients
    pub p_values: Vector,
    /// Lower bounds of confidence intervals
    pub ci_lower: Vector,
    /// Upper bounds of confidence intervals
    pub ci_upper: Vector,
    /// Fitted values (ŷ)
    pub fitted_values: Vector,
    /// Residuals (y - ŷ)
    pub residuals: Vector,
    /// Residual sum of squares
    pub rss: f64,
    /// Residual degrees of freedom, n - p
    pub df_residual: usize,
    /// Residual variance estimate, RSS / (n - p)
    pub sigma2: f64,
    /// (X'X)^{-1}
    pub xtx_inverse: Matrix,
    /// Model statistics
    pub model_statistics: ModelStatistics,
}

impl FittedModel {
    /// Number of observations
    pub fn n_obs(&self) -> usize {
        self.fitted_values.len()
    }

    /// Number of estimated parameters (including intercept)
    pub fn n_params(&self) -> usize {
        self.coefficients.len()
    }

    /// Observed outcome, recovered as ŷ + e
    pub fn response(&self) -> Vector {
        &self.fitted_values + &self.residuals
    }

    /// Total sum of squares around the outcome mean
    pub fn tss(&self) -> f64 {
        let y = self.response();
        let y_mean = y.mean().unwrap_or(0.0);
        y.iter().map(|&yi| (yi - y_mean).powi(2)).sum()
    }

    /// Explained sum of squares
    pub fn ess(&self) -> f64 {
        self.tss() - self.rss
    }

    /// Covariance matrix of the coefficients, σ² (X'X)^{-1}
    pub fn cov_matrix(&self) -> Matrix {
        &self.xtx_inverse * self.sigma2
    }

    /// Convert coefficients to Coefficient structs
    pub fn to_coefficients(&self) -> Vec<Coefficient> {
        self.coefficients
            .iter()
            .zip(self.standard_errors.iter())
            .zip(self.t_statistics.iter())
            .zip(self.p_values.iter())
            .zip(self.ci_lower.iter())
            .zip(self.ci_upper.iter())
            .zip(self.variable_names.iter())
            .map(|((((((&coef, &se), &t), &p), &ci_low), &ci_up), name)| {
                let coefficient = Coefficient::new(name.clone(), coef)
                    .with_std_error(se)
                    .with_t_stat(t)
                    .with_p_value(p)
                    .with_ci(ci_low, ci_up);

                if name == INTERCEPT {
                    coefficient.as_intercept()
                } else {
                    coefficient
                }
            })
            .collect()
    }

    /// Look up one coefficient by name
    pub fn coefficient(&self, name: &str) -> Option<Coefficient> {
        self.to_coefficients().into_iter().find(|c| c.name == name)
    }

    /// Predictions for new design rows
    pub fn predict(&self, x_new: &Matrix) -> Result<Vector> {
        self.check_columns(x_new)?;
        Ok(x_new.dot(&self.coefficients))
    }

    /// Standard errors of the fitted mean at each design row
    pub fn mean_standard_errors(&self, x_new: &Matrix) -> Result<Vector> {
        self.check_columns(x_new)?;
        Ok(x_new
            .rows()
            .into_iter()
            .map(|row| {
                let h = row.dot(&self.xtx_inverse).dot(&row);
                (self.sigma2 * h).max(0.0).sqrt()
            })
            .collect())
    }

    /// Printable regression summary
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            formula: self.formula.clone(),
            n_obs: self.n_obs(),
            n_predictors: self.n_params(),
            coefficients: self.to_coefficients(),
            model_statistics: self.model_statistics,
            residual_statistics: ResidualStatistics::from_residuals(&self.residuals),
        }
    }

    fn check_columns(&self, x_new: &Matrix) -> Result<()> {
        if x_new.ncols() != self.n_params() {
            return Err(ModelError::validation(
                &self.formula,
                format!(
                    "prediction rows have {} columns, model has {} coefficients",
                    x_new.ncols(),
                    self.n_params()
                ),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for FittedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linear Regression Results")?;
        writeln!(f, "========================")?;
        writeln!(f, "Formula:      {}", self.formula)?;
        writeln!(f, "Observations: {}", self.n_obs())?;
        writeln!(f, "Predictors:   {}", self.n_params())?;
        writeln!(f, "RSS:          {:.6}", self.rss)?;
        writeln!(f)?;

        if let Some(r2) = self.model_statistics.r_squared {
            writeln!(f, "R-squared:           {:.4}", r2)?;
        }

        if let Some(adj_r2) = self.model_statistics.adj_r_squared {
            writeln!(f, "Adjusted R-squared:  {:.4}", adj_r2)?;
        }

        if let Some(f_stat) = self.model_statistics.f_statistic {
            writeln!(f, "F-statistic:        {:.4}", f_stat)?;
        }

        if let Some(p_val) = self.model_statistics.f_p_value {
            writeln!(f, "F p-value:          {:.4}", p_val)?;
        }

        if let Some(rse) = self.model_statistics.residual_std_error {
            writeln!(f, "Residual Std Error: {:.4}", rse)?;
        }

        Ok(())
    }
}
