//! Partial F-test between nested linear models

use log::{debug, warn};
use serde::Serialize;

use crate::base::{ModelError, Result};
use crate::provider::StatisticsProvider;

/// Outcome of a partial F-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartialFTest {
    /// F statistic, `((RSS_r - RSS_f) / q) / (RSS_f / df_f)`
    pub f_statistic: f64,
    /// Upper-tail p-value
    pub p_value: f64,
    /// Numerator degrees of freedom, q
    pub df_numerator: usize,
    /// Denominator degrees of freedom, df_f
    pub df_denominator: usize,
    /// RSS_r - RSS_f, clamped at zero
    pub extra_sum_of_squares: f64,
    /// Share of the reduced model's RSS explained by the extra terms
    pub partial_eta_squared: f64,
}

impl PartialFTest {
    /// Whether the extra terms are significant at `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Compares a reduced model against a full model that nests it
pub struct NestedModelComparator<'p, P: StatisticsProvider + ?Sized> {
    provider: &'p P,
}

impl<'p, P: StatisticsProvider + ?Sized> NestedModelComparator<'p, P> {
    /// Create a comparator bound to `provider`
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// Partial F-test from residual sums of squares
    ///
    /// `q` is the number of parameters the full model adds; it must equal
    /// `df_reduced - df_full`.
    pub fn compare(
        &self,
        rss_reduced: f64,
        rss_full: f64,
        df_reduced: usize,
        df_full: usize,
        q: usize,
    ) -> Result<PartialFTest> {
        if q == 0 {
            return Err(ModelError::comparison(
                "q",
                "the full model must add at least one parameter",
            ));
        }

        if df_full == 0 {
            return Err(ModelError::comparison(
                "df_full",
                "the full model has no residual degrees of freedom",
            ));
        }

        if df_reduced.checked_sub(df_full) != Some(q) {
            return Err(ModelError::comparison(
                "q",
                format!(
                    "q = {} does not match df_reduced - df_full = {} - {}",
                    q, df_reduced, df_full
                ),
            ));
        }

        for (statistic, rss) in [("rss_reduced", rss_reduced), ("rss_full", rss_full)] {
            if !(rss.is_finite() && rss >= 0.0) {
                return Err(ModelError::comparison(
                    statistic,
                    format!("residual sum of squares must be finite and non-negative, got {}", rss),
                ));
            }
        }

        let mut extra = rss_reduced - rss_full;
        if extra < 0.0 {
            warn!(
                "Reduced model RSS {:.6e} is below full model RSS {:.6e}; clamping F at 0",
                rss_reduced, rss_full
            );
            extra = 0.0;
        }

        let (f_statistic, p_value) = if rss_full > 0.0 {
            let f = (extra / q as f64) / (rss_full / df_full as f64);
            let cdf = self.provider.fisher_f_cdf(f, q as f64, df_full as f64)?;
            (f, (1.0 - cdf).clamp(0.0, 1.0))
        } else if extra > 0.0 {
            (f64::INFINITY, 0.0)
        } else {
            return Err(ModelError::comparison(
                "F",
                "both models fit exactly; the F statistic is undefined",
            ));
        };

        let partial_eta_squared = if rss_reduced > 0.0 {
            extra / rss_reduced
        } else {
            0.0
        };

        debug!(
            "Partial F({}, {}) = {:.6}, p = {:.6e}",
            q, df_full, f_statistic, p_value
        );

        Ok(PartialFTest {
            f_statistic,
            p_value,
            df_numerator: q,
            df_denominator: df_full,
            extra_sum_of_squares: extra,
            partial_eta_squared,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::LapackStatistics;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_partial_f_value() {
        let comparator = NestedModelComparator::new(&LapackStatistics);
        let test = comparator.compare(30.0, 10.0, 12, 10, 2).unwrap();

        // ((30 - 10) / 2) / (10 / 10) = 10
        assert_abs_diff_eq!(test.f_statistic, 10.0, epsilon = 1e-12);
        assert_eq!(test.df_numerator, 2);
        assert_eq!(test.df_denominator, 10);
        assert_abs_diff_eq!(test.extra_sum_of_squares, 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(test.partial_eta_squared, 20.0 / 30.0, epsilon = 1e-12);
        // F(2, 10) upper tail at 10 is (1 + 10 * 2 / 10)^-5 = 3^-5
        assert_abs_diff_eq!(test.p_value, 3f64.powi(-5), epsilon = 1e-8);
        assert!(test.is_significant(0.01));
    }

    #[test]
    fn test_reduced_below_full_clamps_to_zero() {
        let comparator = NestedModelComparator::new(&LapackStatistics);
        let test = comparator.compare(9.999999, 10.0, 11, 10, 1).unwrap();

        assert_eq!(test.f_statistic, 0.0);
        assert_eq!(test.extra_sum_of_squares, 0.0);
        assert_abs_diff_eq!(test.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_full_fit() {
        let comparator = NestedModelComparator::new(&LapackStatistics);

        let test = comparator.compare(5.0, 0.0, 6, 5, 1).unwrap();
        assert!(test.f_statistic.is_infinite());
        assert_eq!(test.p_value, 0.0);

        assert!(matches!(
            comparator.compare(0.0, 0.0, 6, 5, 1),
            Err(ModelError::Comparison { .. })
        ));
    }

    #[test]
    fn test_invalid_degrees_of_freedom() {
        let comparator = NestedModelComparator::new(&LapackStatistics);

        for (df_r, df_f, q) in [(5, 5, 0), (2, 0, 2), (6, 5, 2), (4, 5, 1)] {
            assert!(matches!(
                comparator.compare(10.0, 5.0, df_r, df_f, q),
                Err(ModelError::Comparison { .. })
            ));
        }

        assert!(matches!(
            comparator.compare(f64::NAN, 5.0, 6, 5, 1),
            Err(ModelError::Comparison { .. })
        ));
        assert!(comparator.compare(10.0, -1.0, 6, 5, 1).is_err());
    }
}
