//! Model summary structures

use super::coefficient::Coefficient;
use super::statistics::{ModelStatistics, ResidualStatistics};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comprehensive model summary structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Model formula, e.g. `"y ~ age + group_B"`
    pub formula: String,
    /// Number of observations
    pub n_obs: usize,
    /// Number of predictors (including intercept)
    pub n_predictors: usize,
    /// Coefficients table
    pub coefficients: Vec<Coefficient>,
    /// Model statistics
    pub model_statistics: ModelStatistics,
    /// Residual statistics
    pub residual_statistics: ResidualStatistics,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linear Model: {}", self.formula)?;
        writeln!(f, "Observations: {}", self.n_obs)?;
        writeln!(f, "Predictors: {}", self.n_predictors)?;
        writeln!(f)?;

        let r = &self.residual_statistics;
        writeln!(f, "Residuals:")?;
        writeln!(
            f,
            "{:>12} {:>12} {:>12} {:>12} {:>12}",
            "Min", "1Q", "Median", "3Q", "Max"
        )?;
        writeln!(
            f,
            "{:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            r.min, r.q1, r.median, r.q3, r.max
        )?;
        writeln!(f)?;

        // Coefficients
        writeln!(f, "Coefficients:")?;
        writeln!(
            f,
            "{:<20} {:>12} {:>12} {:>12} {:>12}",
            "Term", "Estimate", "Std Error", "t-value", "p-value"
        )?;
        writeln!(
            f,
            "{:-<20} {:-<12} {:-<12} {:-<12} {:-<12}",
            "", "", "", "", ""
        )?;

        for coeff in &self.coefficients {
            writeln!(
                f,
                "{:<20} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {}",
                coeff.name,
                coeff.estimate,
                coeff.std_error.unwrap_or(f64::NAN),
                coeff.t_stat.unwrap_or(f64::NAN),
                coeff.p_value.unwrap_or(f64::NAN),
                coeff.significance()
            )?;
        }
        writeln!(f)?;

        // Model statistics
        let stats = &self.model_statistics;
        if let (Some(rse), Some(df)) = (stats.residual_std_error, stats.df_residual) {
            writeln!(f, "Residual standard error: {:.4} on {} degrees of freedom", rse, df)?;
        }
        if let (Some(r2), Some(adj_r2)) = (stats.r_squared, stats.adj_r_squared) {
            writeln!(f, "R-squared: {:.4}, Adjusted R-squared: {:.4}", r2, adj_r2)?;
        }
        if let (Some(f_stat), Some(p), Some(df_model), Some(df_resid)) = (
            stats.f_statistic,
            stats.f_p_value,
            stats.df_model,
            stats.df_residual,
        ) {
            writeln!(
                f,
                "F-statistic: {:.4} on {} and {} DF, p-value: {:.4e}",
                f_stat, df_model, df_resid, p
            )?;
        }
        if let (Some(aic), Some(bic)) = (stats.aic, stats.bic) {
            writeln!(f, "AIC: {:.4}, BIC: {:.4}", aic, bic)?;
        }

        Ok(())
    }
}
