//! Ordinary Least Squares (OLS) linear regression
//!
//! Solves the normal equations `(X'X) β = X'y` with an explicit inverse of the
//! Gram matrix. The inverse is kept on the result for standard errors and
//! prediction variances.

use log::debug;

use crate::base::{ModelError, ModelStatistics, Result, Vector};
use crate::design::DesignMatrix;
use crate::lm::{FittedModel, LinearConfig};
use crate::provider::StatisticsProvider;

/// OLS fitter bound to a statistics provider
pub struct OrdinaryLeastSquares<'p, P: StatisticsProvider + ?Sized> {
    provider: &'p P,
    config: LinearConfig,
}

impl<'p, P: StatisticsProvider + ?Sized> OrdinaryLeastSquares<'p, P> {
    /// Create a fitter with the default configuration
    pub fn new(provider: &'p P) -> Self {
        Self {
            provider,
            config: LinearConfig::default(),
        }
    }

    /// Set configuration
    pub fn config(mut self, config: LinearConfig) -> Self {
        self.config = config;
        self
    }

    /// Fit the model to a design matrix
    pub fn fit(&self, design: &DesignMatrix) -> Result<FittedModel> {
        self.config.validate()?;

        let x = design.x();
        let y = design.y();
        let n = design.nrows();
        let p = design.ncols();
        let formula = design.formula();

        debug!("Fitting OLS {} with n = {}, p = {}", formula, n, p);

        // Gram matrix and singularity check
        let gram = x.t().dot(x);
        let determinant = self.provider.determinant(&gram)?;
        if !(determinant.abs() >= self.config.singular_tolerance) {
            return Err(ModelError::SingularMatrix {
                matrix: format!("X'X of {}", formula),
                determinant,
                tolerance: self.config.singular_tolerance,
            });
        }

        let xtx_inverse = self.provider.inverse(&gram)?;
        let coefficients = xtx_inverse.dot(&x.t().dot(y));

        let fitted_values = x.dot(&coefficients);
        let residuals = y - &fitted_values;
        let rss = residuals.dot(&residuals);

        if n <= p {
            return Err(ModelError::DegreesOfFreedom {
                model: formula,
                n_samples: n,
                n_params: p,
            });
        }
        let df_residual = n - p;
        let sigma2 = rss / df_residual as f64;

        let standard_errors =
            self.standard_errors(&xtx_inverse.diag().to_owned(), sigma2, design)?;

        let (t_statistics, p_values, ci_lower, ci_upper) =
            self.calculate_inference(&coefficients, &standard_errors, df_residual)?;

        let model_statistics = self.model_statistics(y, rss, n, p)?;

        debug!(
            "OLS {}: RSS = {:.6e}, df = {}, det(X'X) = {:.6e}",
            formula, rss, df_residual, determinant
        );

        Ok(FittedModel {
            formula,
            variable_names: design.column_names().to_vec(),
            coefficients,
            standard_errors,
            t_statistics,
            p_values,
            ci_lower,
            ci_upper,
            fitted_values,
            residuals,
            rss,
            df_residual,
            sigma2,
            xtx_inverse,
            model_statistics,
        })
    }

    /// Standard errors, sqrt(σ² · diag((X'X)^{-1}))
    fn standard_errors(
        &self,
        diagonal: &Vector,
        sigma2: f64,
        design: &DesignMatrix,
    ) -> Result<Vector> {
        if let Some(j) = diagonal.iter().position(|&v| !(v > 0.0)) {
            return Err(ModelError::numerical(
                format!(
                    "diagonal of (X'X)^-1 for '{}' is {}, expected a positive value",
                    design.column_names()[j],
                    diagonal[j]
                ),
                "standard_errors",
            ));
        }

        Ok(diagonal.mapv(|v| (sigma2 * v).sqrt()))
    }

    /// t-statistics, two-sided p-values and confidence intervals
    fn calculate_inference(
        &self,
        coefficients: &Vector,
        std_errors: &Vector,
        df: usize,
    ) -> Result<(Vector, Vector, Vector, Vector)> {
        let df = df as f64;

        let t_statistics: Vector = coefficients
            .iter()
            .zip(std_errors.iter())
            .map(|(&coef, &se)| {
                // 0/0 only happens on an exact fit with a zero estimate
                if se == 0.0 && coef == 0.0 {
                    0.0
                } else {
                    coef / se
                }
            })
            .collect();

        let p_values = t_statistics
            .iter()
            .map(|&t| {
                if t.is_infinite() {
                    return Ok(0.0);
                }
                let cdf = self.provider.students_t_cdf(t.abs(), df)?;
                Ok((2.0 * (1.0 - cdf)).clamp(0.0, 1.0))
            })
            .collect::<Result<Vector>>()?;

        let alpha = 1.0 - self.config.confidence_level;
        let t_critical = self.provider.students_t_quantile(1.0 - alpha / 2.0, df)?;

        let ci_lower: Vector = coefficients
            .iter()
            .zip(std_errors.iter())
            .map(|(&coef, &se)| coef - t_critical * se)
            .collect();

        let ci_upper: Vector = coefficients
            .iter()
            .zip(std_errors.iter())
            .map(|(&coef, &se)| coef + t_critical * se)
            .collect();

        Ok((t_statistics, p_values, ci_lower, ci_upper))
    }

    /// Goodness-of-fit statistics
    fn model_statistics(
        &self,
        y: &Vector,
        rss: f64,
        n: usize,
        p: usize,
    ) -> Result<ModelStatistics> {
        let y_mean = y.mean().unwrap_or(0.0);
        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let df_residual = (n - p) as f64;
        let df_model = p - 1;

        let (r_squared, adj_r_squared) = if tss > 0.0 {
            let r2 = 1.0 - rss / tss;
            let adj = 1.0 - (1.0 - r2) * ((n as f64 - 1.0) / df_residual);
            (Some(r2), Some(adj))
        } else {
            (None, None)
        };

        let (f_statistic, f_p_value) = if df_model > 0 && tss > 0.0 {
            let f_stat = self.overall_f(tss, rss, df_model as f64, df_residual);
            let f_p = if f_stat.is_infinite() {
                0.0
            } else {
                let cdf = self.provider.fisher_f_cdf(f_stat, df_model as f64, df_residual)?;
                (1.0 - cdf).clamp(0.0, 1.0)
            };
            (Some(f_stat), Some(f_p))
        } else {
            (None, None)
        };

        // Gaussian likelihood at the ML variance RSS / n; undefined for an exact fit
        let (log_likelihood, aic, bic) = if rss > 0.0 {
            let sigma2 = rss / n as f64;
            let ll = -0.5 * n as f64 * ((2.0 * std::f64::consts::PI * sigma2).ln() + 1.0);
            let k = p as f64;
            (
                Some(ll),
                Some(2.0 * k - 2.0 * ll),
                Some((n as f64).ln() * k - 2.0 * ll),
            )
        } else {
            (None, None, None)
        };

        Ok(ModelStatistics {
            r_squared,
            adj_r_squared,
            residual_std_error: Some((rss / df_residual).sqrt()),
            f_statistic,
            f_p_value,
            log_likelihood,
            aic,
            bic,
            df_residual: Some(n - p),
            df_model: Some(df_model),
        })
    }

    /// F-statistic against the intercept-only model
    fn overall_f(&self, tss: f64, rss: f64, df_model: f64, df_residual: f64) -> f64 {
        let ess = (tss - rss).max(0.0);
        if rss > 0.0 {
            (ess / df_model) / (rss / df_residual)
        } else {
            f64::INFINITY
        }
    }
}
