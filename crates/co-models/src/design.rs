//! Design matrix construction
//!
//! A [`DesignMatrix`] is the dense `n × p` numeric input of a linear model:
//! an intercept column of ones followed by the named predictors, plus the
//! outcome vector. Columns are read through [`ColumnSource`] only.

use log::trace;
use ndarray::Array2;

use co_core::data::{ColumnSource, ColumnType, FloatArray, StringArray};

use crate::base::{Matrix, ModelError, Result, Vector};

/// Name of the intercept column
pub const INTERCEPT: &str = "(Intercept)";

/// Dense design matrix with its outcome vector
///
/// Stored row-major; row `i` of `x` and element `i` of `y` come from the same
/// source row.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix {
    x: Matrix,
    y: Vector,
    column_names: Vec<String>,
    response: String,
}

impl DesignMatrix {
    /// Wrap an existing matrix and outcome vector
    pub fn new(
        x: Matrix,
        y: Vector,
        column_names: Vec<String>,
        response: impl Into<String>,
    ) -> Result<Self> {
        let response = response.into();

        if y.len() != x.nrows() {
            return Err(ModelError::validation(
                response,
                format!("outcome has {} rows but the design has {}", y.len(), x.nrows()),
            ));
        }

        if column_names.len() != x.ncols() {
            return Err(ModelError::validation(
                response,
                format!(
                    "{} column names given for {} design columns",
                    column_names.len(),
                    x.ncols()
                ),
            ));
        }

        Ok(Self {
            x: x.as_standard_layout().into_owned(),
            y,
            column_names,
            response,
        })
    }

    /// Design matrix X
    pub fn x(&self) -> &Matrix {
        &self.x
    }

    /// Outcome vector y
    pub fn y(&self) -> &Vector {
        &self.y
    }

    /// Column names, intercept first
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Outcome name
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Number of observations
    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    /// Number of parameters
    pub fn ncols(&self) -> usize {
        self.x.ncols()
    }

    /// R-style formula for the columns, e.g. `"y ~ age + group_B"`
    pub fn formula(&self) -> String {
        let has_intercept = self.column_names.first().map(String::as_str) == Some(INTERCEPT);
        let mut terms: Vec<&str> = self
            .column_names
            .iter()
            .map(String::as_str)
            .filter(|name| *name != INTERCEPT)
            .collect();

        if !has_intercept {
            terms.insert(0, "0");
        } else if terms.is_empty() {
            terms.push("1");
        }

        format!("{} ~ {}", self.response, terms.join(" + "))
    }
}

/// Builds intercept-plus-predictors designs from a [`ColumnSource`]
pub struct DesignMatrixBuilder<'a, S: ColumnSource + ?Sized> {
    source: &'a S,
    n: usize,
}

impl<'a, S: ColumnSource + ?Sized> DesignMatrixBuilder<'a, S> {
    /// Builder expecting `source.nrows()` observations
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            n: source.nrows(),
        }
    }

    /// Override the expected number of observations
    pub fn rows(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Assemble `[1 | predictors]` and the outcome vector
    pub fn build<C: AsRef<str>>(&self, predictors: &[C], outcome: &str) -> Result<DesignMatrix> {
        let n = self.n;
        let p = predictors.len() + 1;

        let y = self.read_numeric(outcome)?;

        let mut x = Array2::ones((n, p));
        let mut column_names = Vec::with_capacity(p);
        column_names.push(INTERCEPT.to_string());

        for (j, name) in predictors.iter().enumerate() {
            let name = name.as_ref();
            let column = self.read_numeric(name)?;
            x.column_mut(j + 1).assign(&column);
            column_names.push(name.to_string());
        }

        if n <= p {
            return Err(ModelError::validation(
                outcome,
                format!(
                    "{} observations leave no residual degrees of freedom for {} parameters",
                    n, p
                ),
            ));
        }

        trace!("Built {} x {} design for '{}'", n, p, outcome);

        DesignMatrix::new(x, y, column_names, outcome)
    }

    fn read_numeric(&self, name: &str) -> Result<FloatArray> {
        match self.source.column_type(name) {
            None => return Err(ModelError::validation(name, "column not found")),
            Some(column_type) if !column_type.is_numeric() => {
                return Err(ModelError::validation(
                    name,
                    format!("expected a numeric column, found {}", column_type),
                ));
            }
            Some(_) => {}
        }

        let values = self.source.numeric_column(name)?;

        if values.len() != self.n {
            return Err(ModelError::validation(
                name,
                format!("column has {} rows, expected {}", values.len(), self.n),
            ));
        }

        if let Some(row) = values.iter().position(|v| !v.is_finite()) {
            return Err(ModelError::validation(
                name,
                format!("non-finite value at row {}", row),
            ));
        }

        Ok(values)
    }
}

/// A [`ColumnSource`] with extra numeric columns layered on top
///
/// Extra columns shadow base columns of the same name.
pub struct AugmentedSource<'a, S: ColumnSource + ?Sized> {
    base: &'a S,
    extra: Vec<(String, Vector)>,
}

impl<'a, S: ColumnSource + ?Sized> AugmentedSource<'a, S> {
    /// Layer `extra` columns over `base`
    pub fn new(base: &'a S, extra: Vec<(String, Vector)>) -> Self {
        Self { base, extra }
    }

    fn extra_column(&self, name: &str) -> Option<&Vector> {
        self.extra
            .iter()
            .find(|(extra_name, _)| extra_name == name)
            .map(|(_, column)| column)
    }
}

impl<S: ColumnSource + ?Sized> ColumnSource for AugmentedSource<'_, S> {
    fn nrows(&self) -> usize {
        self.base.nrows()
    }

    fn column_type(&self, name: &str) -> Option<ColumnType> {
        match self.extra_column(name) {
            Some(_) => Some(ColumnType::Float),
            None => self.base.column_type(name),
        }
    }

    fn numeric_column(&self, name: &str) -> co_core::data::Result<FloatArray> {
        match self.extra_column(name) {
            Some(column) => Ok(column.clone()),
            None => self.base.numeric_column(name),
        }
    }

    fn categorical_column(&self, name: &str) -> co_core::data::Result<StringArray> {
        self.base.categorical_column(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use co_core::data::{DataFrameBuilder, Series};
    use ndarray::array;

    fn frame() -> co_core::data::DataFrame {
        DataFrameBuilder::new()
            .with_column("y", Series::float(vec![1.0, 2.0, 3.0, 4.0]))
            .unwrap()
            .with_column("x", Series::int(vec![10, 20, 30, 40]))
            .unwrap()
            .with_column("g", Series::categorical(&["a", "b", "a", "b"]))
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_intercept_and_predictors() {
        let df = frame();
        let design = DesignMatrixBuilder::new(&df).build(&["x"], "y").unwrap();

        assert_eq!(design.x(), &array![[1.0, 10.0], [1.0, 20.0], [1.0, 30.0], [1.0, 40.0]]);
        assert_eq!(design.y(), &array![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(design.column_names(), &["(Intercept)", "x"]);
        assert_eq!(design.formula(), "y ~ x");
    }

    #[test]
    fn test_build_rejects_missing_and_non_numeric() {
        let df = frame();
        let builder = DesignMatrixBuilder::new(&df);

        match builder.build(&["nope"], "y") {
            Err(ModelError::Validation { column, .. }) => assert_eq!(column, "nope"),
            other => panic!("Expected Validation error, got {:?}", other),
        }

        match builder.build(&["g"], "y") {
            Err(ModelError::Validation { column, message }) => {
                assert_eq!(column, "g");
                assert!(message.contains("categorical"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_build_requires_residual_degrees_of_freedom() {
        let df = frame();
        let extra = vec![
            ("a".to_string(), array![1.0, 0.0, 0.0, 0.0]),
            ("b".to_string(), array![0.0, 1.0, 0.0, 0.0]),
        ];
        let augmented = AugmentedSource::new(&df, extra);

        let result = DesignMatrixBuilder::new(&augmented).build(&["x", "a", "b"], "y");
        assert!(matches!(result, Err(ModelError::Validation { .. })));
    }

    #[test]
    fn test_build_checks_column_length() {
        let df = frame();
        let augmented = AugmentedSource::new(&df, vec![("short".to_string(), array![1.0, 2.0])]);

        match DesignMatrixBuilder::new(&augmented).build(&["short"], "y") {
            Err(ModelError::Validation { column, message }) => {
                assert_eq!(column, "short");
                assert!(message.contains("2 rows"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_augmented_source_shadows_base() {
        let df = frame();
        let extra = vec![("x".to_string(), array![0.0, 1.0, 0.0, 1.0])];
        let augmented = AugmentedSource::new(&df, extra);

        assert_eq!(augmented.numeric_column("x").unwrap(), array![0.0, 1.0, 0.0, 1.0]);
        assert_eq!(augmented.column_type("g"), Some(ColumnType::Categorical));
        assert_eq!(augmented.categorical_column("g").unwrap(), vec!["a", "b", "a", "b"]);
    }

    #[test]
    fn test_design_formula_variants() {
        let x = array![[1.0], [1.0]];
        let design =
            DesignMatrix::new(x, array![1.0, 2.0], vec![INTERCEPT.to_string()], "y").unwrap();
        assert_eq!(design.formula(), "y ~ 1");

        let x = array![[2.0], [3.0]];
        let design = DesignMatrix::new(x, array![1.0, 2.0], vec!["z".to_string()], "y").unwrap();
        assert_eq!(design.formula(), "y ~ 0 + z");

        let short = DesignMatrix::new(array![[1.0]], array![1.0, 2.0], vec!["z".to_string()], "y");
        assert!(short.is_err());
    }
}
