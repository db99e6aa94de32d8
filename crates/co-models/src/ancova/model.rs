//! ANCOVA orchestration
//!
//! Fits a covariates-only model and a covariates-plus-group model on the same
//! rows, then tests the group indicators with a partial F-test.

use log::debug;
use ndarray::Array2;
use std::collections::HashSet;

use co_core::data::{ColumnSource, ColumnType};

use super::comparison::NestedModelComparator;
use super::encoder::{CategoricalEncoder, EncodedFactor};
use super::result::{AdjustedMean, AncovaResult};
use super::AncovaConfig;
use crate::base::{ModelError, Result};
use crate::design::{AugmentedSource, DesignMatrix, DesignMatrixBuilder};
use crate::lm::{FittedModel, OrdinaryLeastSquares};
use crate::provider::{LapackStatistics, StatisticsProvider};

/// Analysis of covariance for one dependent variable and one grouping factor
#[derive(Debug, Clone)]
pub struct Ancova<P = LapackStatistics> {
    dependent: String,
    group: String,
    covariates: Vec<String>,
    config: AncovaConfig,
    provider: P,
}

impl Ancova<LapackStatistics> {
    /// Create an analysis using the default LAPACK-backed provider
    pub fn new(dependent: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            dependent: dependent.into(),
            group: group.into(),
            covariates: Vec::new(),
            config: AncovaConfig::default(),
            provider: LapackStatistics,
        }
    }
}

impl<P: StatisticsProvider> Ancova<P> {
    /// Set the covariates, replacing any given before
    pub fn covariates<C: AsRef<str>>(mut self, covariates: &[C]) -> Self {
        self.covariates = covariates.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Add one covariate
    pub fn covariate(mut self, covariate: impl Into<String>) -> Self {
        self.covariates.push(covariate.into());
        self
    }

    /// Set configuration
    pub fn config(mut self, config: AncovaConfig) -> Self {
        self.config = config;
        self
    }

    /// Use another statistics provider
    pub fn with_provider<Q: StatisticsProvider>(self, provider: Q) -> Ancova<Q> {
        Ancova {
            dependent: self.dependent,
            group: self.group,
            covariates: self.covariates,
            config: self.config,
            provider,
        }
    }

    /// Run the analysis on `data`
    pub fn fit<S: ColumnSource + ?Sized>(&self, data: &S) -> Result<AncovaResult> {
        self.validate(data)?;
        let n = data.nrows();

        debug!(
            "ANCOVA {} ~ {} + {} on {} rows",
            self.dependent,
            self.covariates.join(" + "),
            self.group,
            n
        );

        let factor = self.encode_group(data, n)?;
        debug!(
            "Group '{}' has levels {:?} (reference '{}')",
            self.group,
            factor.levels.as_slice(),
            factor.levels.reference()
        );

        let indicator_names = factor.indicator_names();
        let augmented = AugmentedSource::new(data, factor.indicators.clone());
        let builder = DesignMatrixBuilder::new(&augmented).rows(n);

        let reduced_design = builder.build(&self.covariates, &self.dependent)?;
        let full_predictors: Vec<String> = self
            .covariates
            .iter()
            .cloned()
            .chain(indicator_names)
            .collect();
        let full_design = builder.build(&full_predictors, &self.dependent)?;

        let fitter = OrdinaryLeastSquares::new(&self.provider).config(self.config.linear);
        let reduced_model = fitter.fit(&reduced_design)?;
        let full_model = fitter.fit(&full_design)?;

        let q = factor.levels.len() - 1;
        let partial_f = NestedModelComparator::new(&self.provider).compare(
            reduced_model.rss,
            full_model.rss,
            reduced_model.df_residual,
            full_model.df_residual,
            q,
        )?;

        let adjusted_means = self.adjusted_means(&full_design, &full_model, &factor)?;

        Ok(AncovaResult {
            dependent: self.dependent.clone(),
            group: self.group.clone(),
            covariates: self.covariates.clone(),
            n_obs: n,
            levels: factor.levels,
            reduced_model,
            full_model,
            partial_f,
            adjusted_means,
        })
    }

    /// Role, type and naming checks before anything is read
    fn validate<S: ColumnSource + ?Sized>(&self, data: &S) -> Result<()> {
        self.config.validate()?;

        if self.covariates.is_empty() {
            return Err(ModelError::validation(
                "covariates",
                "at least one covariate is required",
            ));
        }

        if self.dependent == self.group {
            return Err(ModelError::validation(
                &self.group,
                "group cannot also be the dependent variable",
            ));
        }

        let mut seen = HashSet::new();
        for covariate in &self.covariates {
            if covariate == &self.dependent || covariate == &self.group {
                return Err(ModelError::validation(
                    covariate,
                    "covariate cannot also be the dependent variable or the group",
                ));
            }
            if !seen.insert(covariate.as_str()) {
                return Err(ModelError::validation(covariate, "covariate listed twice"));
            }
        }

        for name in std::iter::once(&self.dependent).chain(&self.covariates) {
            match data.column_type(name) {
                None => return Err(ModelError::validation(name, "column not found")),
                Some(column_type) if !column_type.is_numeric() => {
                    return Err(ModelError::validation(
                        name,
                        format!("expected a numeric column, found {}", column_type),
                    ));
                }
                Some(_) => {}
            }
        }

        match data.column_type(&self.group) {
            None => Err(ModelError::validation(&self.group, "column not found")),
            Some(column_type) if !column_type.is_discrete() => Err(ModelError::validation(
                &self.group,
                format!(
                    "expected a categorical, string, integer or boolean column, found {}",
                    column_type
                ),
            )),
            Some(_) => Ok(()),
        }
    }

    /// Levels and indicators of the group column
    ///
    /// Integer columns keep numeric level order and boolean columns order
    /// `false` before `true`.
    fn encode_group<S: ColumnSource + ?Sized>(
        &self,
        data: &S,
        n: usize,
    ) -> Result<EncodedFactor> {
        let factor = match data.column_type(&self.group) {
            Some(ColumnType::Int) => {
                let codes = self
                    .group_numbers(data, n)?
                    .into_iter()
                    .enumerate()
                    .map(|(row, value)| self.integer_code(row, value))
                    .collect::<Result<Vec<i64>>>()?;
                CategoricalEncoder::encode_values(&self.group, &codes)?
            }
            Some(ColumnType::Bool) => {
                let flags: Vec<bool> = self
                    .group_numbers(data, n)?
                    .into_iter()
                    .map(|value| value != 0.0)
                    .collect();
                CategoricalEncoder::encode_values(&self.group, &flags)?
            }
            _ => {
                let labels = data.categorical_column(&self.group)?;
                self.check_group_rows(labels.len(), n)?;
                CategoricalEncoder::encode(&self.group, &labels)?
            }
        };

        for name in factor.indicator_names() {
            if name == self.dependent || self.covariates.contains(&name) {
                return Err(ModelError::validation(
                    &name,
                    "indicator column name collides with a model variable",
                ));
            }
        }

        Ok(factor)
    }

    fn group_numbers<S: ColumnSource + ?Sized>(&self, data: &S, n: usize) -> Result<Vec<f64>> {
        let values = data.numeric_column(&self.group)?;
        self.check_group_rows(values.len(), n)?;
        Ok(values.to_vec())
    }

    fn check_group_rows(&self, len: usize, n: usize) -> Result<()> {
        if len != n {
            return Err(ModelError::validation(
                &self.group,
                format!("column has {} rows, expected {}", len, n),
            ));
        }
        Ok(())
    }

    fn integer_code(&self, row: usize, value: f64) -> Result<i64> {
        if value.is_finite() && value.fract() == 0.0 {
            Ok(value as i64)
        } else {
            Err(ModelError::validation(
                &self.group,
                format!("non-integer group code {} at row {}", value, row),
            ))
        }
    }

    /// Full-model predictions per level with covariates held at their means
    fn adjusted_means(
        &self,
        design: &DesignMatrix,
        model: &FittedModel,
        factor: &EncodedFactor,
    ) -> Result<Vec<AdjustedMean>> {
        let k = self.covariates.len();
        let n_levels = factor.levels.len();
        let x = design.x();

        let mut rows = Array2::zeros((n_levels, design.ncols()));
        for (level, mut row) in rows.rows_mut().into_iter().enumerate() {
            row[0] = 1.0;
            for j in 1..=k {
                row[j] = x.column(j).mean().unwrap_or(0.0);
            }
            if level > 0 {
                row[k + level] = 1.0;
            }
        }

        let means = model.predict(&rows)?;
        let std_errors = model.mean_standard_errors(&rows)?;

        Ok(factor
            .levels
            .as_slice()
            .iter()
            .zip(means.iter().zip(std_errors.iter()))
            .map(|(level, (&mean, &std_error))| AdjustedMean {
                level: level.clone(),
                mean,
                std_error,
            })
            .collect())
    }
}
