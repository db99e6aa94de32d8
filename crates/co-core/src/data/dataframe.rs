//! DataFrame implementation for tabular data
//!
//! A DataFrame is a 2-dimensional labeled data structure with columns of
//! potentially different types. It's optimized for statistical operations.

use super::*;

use indexmap::IndexMap;

/// Main DataFrame structure
#[derive(Clone, Debug, Default)]
pub struct DataFrame {
    pub(crate) columns: IndexMap<String, Series>,
    pub(crate) nrows: usize,
}

impl DataFrame {
    /// Create an empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create DataFrame from columns
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Series)>,
        S: Into<String>,
    {
        let mut builder = DataFrameBuilder::new();

        for (name, series) in columns.into_iter() {
            builder = builder.with_column(name, series)?;
        }

        builder.build()
    }

    /// Get the shape of the DataFrame (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.columns.len())
    }

    /// Get the number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Get the number of columns
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(|k| k.as_str()).collect()
    }

    /// Get a reference to a column
    pub fn get_column(&self, name: &str) -> Option<&Series> {
        self.columns.get(name)
    }

    /// Check if column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Add a new column, with the same checks as [`DataFrameBuilder::with_column`]
    pub fn with_column<S: Into<String>>(self, name: S, series: Series) -> Result<Self> {
        self.columns
            .into_iter()
            .try_fold(DataFrameBuilder::new(), |builder, (existing, column)| {
                builder.with_column(existing, column)
            })?
            .with_column(name, series)?
            .build()
    }

    /// Look up a column, failing with `ColumnNotFound`
    pub(crate) fn require_column(&self, name: &str) -> Result<&Series> {
        self.columns
            .get(name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))
    }
}

impl std::fmt::Display for DataFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DataFrame({} rows × {} cols)", self.nrows, self.ncols())
    }
}
