//! ANCOVA result structure

use serde::Serialize;
use std::fmt;

use super::comparison::PartialFTest;
use super::encoder::{CategoricalEncoder, GroupLevels};
use crate::base::Coefficient;
use crate::lm::FittedModel;

/// Group mean of the outcome evaluated at the covariate means
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustedMean {
    /// Group level
    pub level: String,
    /// Adjusted mean
    pub mean: f64,
    /// Standard error of the adjusted mean
    pub std_error: f64,
}

/// Result of an analysis of covariance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AncovaResult {
    /// Dependent variable
    pub dependent: String,
    /// Grouping factor
    pub group: String,
    /// Covariates, in the order given
    pub covariates: Vec<String>,
    /// Number of observations
    pub n_obs: usize,
    /// Group levels; the first is the reference
    pub levels: GroupLevels,
    /// Covariates-only model
    pub reduced_model: FittedModel,
    /// Covariates plus group indicators
    pub full_model: FittedModel,
    /// Test of the group effect
    pub partial_f: PartialFTest,
    /// Adjusted group means, in level order
    pub adjusted_means: Vec<AdjustedMean>,
}

impl AncovaResult {
    /// F statistic for the group effect
    pub fn f_statistic(&self) -> f64 {
        self.partial_f.f_statistic
    }

    /// p-value for the group effect
    pub fn p_value(&self) -> f64 {
        self.partial_f.p_value
    }

    /// Whether the group effect is significant at `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.partial_f.is_significant(alpha)
    }

    /// Full-model coefficient of a non-reference level
    ///
    /// This is the adjusted difference between `level` and the reference level.
    pub fn group_effect(&self, level: &str) -> Option<Coefficient> {
        self.full_model
            .coefficient(&CategoricalEncoder::indicator_name(&self.group, level))
    }

    /// Adjusted mean for one level
    pub fn adjusted_mean(&self, level: &str) -> Option<&AdjustedMean> {
        self.adjusted_means.iter().find(|m| m.level == level)
    }
}

impl fmt::Display for AncovaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let test = &self.partial_f;
        let residual_df = test.df_denominator;
        let residual_ms = self.full_model.sigma2;

        writeln!(f, "Analysis of Covariance")?;
        writeln!(f, "======================")?;
        writeln!(f, "Response:   {}", self.dependent)?;
        writeln!(f, "Group:      {} (reference: {})", self.group, self.levels.reference())?;
        writeln!(f, "Covariates: {}", self.covariates.join(", "))?;
        writeln!(f, "Observations: {}", self.n_obs)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<14} {:>6} {:>14} {:>14} {:>12} {:>12}",
            "Source", "Df", "Sum Sq", "Mean Sq", "F value", "Pr(>F)"
        )?;
        writeln!(
            f,
            "{:-<14} {:-<6} {:-<14} {:-<14} {:-<12} {:-<12}",
            "", "", "", "", "", ""
        )?;
        let k = self.covariates.len();
        let covariate_ss = self.reduced_model.ess();
        writeln!(
            f,
            "{:<14} {:>6} {:>14.6} {:>14.6}",
            "Covariates",
            k,
            covariate_ss,
            covariate_ss / k as f64
        )?;
        writeln!(
            f,
            "{:<14} {:>6} {:>14.6} {:>14.6} {:>12.4} {:>12.4e}",
            self.group,
            test.df_numerator,
            test.extra_sum_of_squares,
            test.extra_sum_of_squares / test.df_numerator as f64,
            test.f_statistic,
            test.p_value
        )?;
        writeln!(
            f,
            "{:<14} {:>6} {:>14.6} {:>14.6}",
            "Residuals", residual_df, self.full_model.rss, residual_ms
        )?;
        writeln!(f)?;
        writeln!(f, "Partial eta squared: {:.4}", test.partial_eta_squared)?;
        writeln!(f)?;

        writeln!(f, "Adjusted means (covariates at their means):")?;
        for mean in &self.adjusted_means {
            writeln!(
                f,
                "  {:<12} {:>12.4} (SE {:.4})",
                mean.level, mean.mean, mean.std_error
            )?;
        }

        Ok(())
    }
}
