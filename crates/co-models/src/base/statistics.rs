//! Statistical structures for model results

use serde::{Deserialize, Serialize};

use super::Vector;

/// Model statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelStatistics {
    /// R-squared
    pub r_squared: Option<f64>,
    /// Adjusted R-squared
    pub adj_r_squared: Option<f64>,
    /// Residual standard error
    pub residual_std_error: Option<f64>,
    /// F-statistic against the intercept-only model
    pub f_statistic: Option<f64>,
    /// F-statistic p-value
    pub f_p_value: Option<f64>,
    /// Log-likelihood
    pub log_likelihood: Option<f64>,
    /// AIC
    pub aic: Option<f64>,
    /// BIC
    pub bic: Option<f64>,
    /// Residual degrees of freedom
    pub df_residual: Option<usize>,
    /// Model degrees of freedom
    pub df_model: Option<usize>,
}

/// Residual statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResidualStatistics {
    /// Minimum residual
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Maximum residual
    pub max: f64,
}

impl ResidualStatistics {
    /// Five-number summary of a residual vector
    pub fn from_residuals(residuals: &Vector) -> Self {
        if residuals.is_empty() {
            return Self::default();
        }

        let mut sorted: Vec<f64> = residuals.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        }
    }
}

/// Linear-interpolated quantile of sorted, non-empty data
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let idx = (sorted.len() as f64 - 1.0) * q;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = idx - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_residual_five_numbers() {
        let stats = ResidualStatistics::from_residuals(&array![3.0, -1.0, 2.0, 0.0, -2.0]);

        assert_eq!(stats.min, -2.0);
        assert_eq!(stats.q1, -1.0);
        assert_eq!(stats.median, 0.0);
        assert_eq!(stats.q3, 2.0);
        assert_eq!(stats.max, 3.0);
    }

    #[test]
    fn test_quantile_interpolates() {
        let stats = ResidualStatistics::from_residuals(&array![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q1, 1.75);
    }
}
