//! Traits for data operations

use super::*;

/// Read-only, name-based access to the columns of a table
///
/// Models depend on this trait only. A column is addressed by name, has a
/// declared [`ColumnType`], and is read either as numbers or as labels.
/// Implementations must not assume every column has `nrows()` entries; callers
/// check lengths themselves.
pub trait ColumnSource: Send + Sync {
    /// Number of rows in the table
    fn nrows(&self) -> usize;

    /// Declared type of a column, or `None` if it does not exist
    fn column_type(&self, name: &str) -> Option<ColumnType>;

    /// A numeric column as floats
    fn numeric_column(&self, name: &str) -> Result<FloatArray>;

    /// A categorical or string column as row labels
    fn categorical_column(&self, name: &str) -> Result<StringArray>;

    /// Check if column exists
    fn has_column(&self, name: &str) -> bool {
        self.column_type(name).is_some()
    }
}

impl ColumnSource for DataFrame {
    fn nrows(&self) -> usize {
        self.nrows()
    }

    fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.get_column(name).map(Series::column_type)
    }

    fn numeric_column(&self, name: &str) -> Result<FloatArray> {
        let series = self.require_column(name)?;
        if !series.column_type().is_numeric() {
            return Err(DataError::TypeMismatch {
                column: name.to_string(),
                expected: "numeric",
                actual: series.dtype(),
            });
        }
        series.to_float_array()
    }

    fn categorical_column(&self, name: &str) -> Result<StringArray> {
        let series = self.require_column(name)?;
        if !series.column_type().is_categorical() {
            return Err(DataError::TypeMismatch {
                column: name.to_string(),
                expected: "categorical or string",
                actual: series.dtype(),
            });
        }
        series.to_labels()
    }
}
