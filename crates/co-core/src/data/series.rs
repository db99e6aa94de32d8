//! Series data structure for holding homogeneous data
//!
//! A Series is a one-dimensional array that can hold data of a specific type.
//! It's the building block of DataFrames.

use super::*;

use ndarray::Array1;

/// A Series is a typed, one-dimensional array of data
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    /// Floating point numbers (f64)
    Float(FloatArray),
    /// Integer numbers (i64)
    Int(IntArray),
    /// Boolean values
    Bool(BoolArray),
    /// String values
    String(StringArray),
    /// Categorical data (encoded as u32)
    Categorical(Array1<u32>, Vec<String>), // values, categories
}

impl Series {
    /// Create a new Float series
    pub fn float(data: impl Into<FloatArray>) -> Self {
        Series::Float(data.into())
    }

    /// Create a new Int series
    pub fn int(data: impl Into<IntArray>) -> Self {
        Series::Int(data.into())
    }

    /// Create a new Bool series
    pub fn bool(data: impl Into<BoolArray>) -> Self {
        Series::Bool(data.into())
    }

    /// Create a new String series
    pub fn string(data: impl Into<StringArray>) -> Self {
        Series::String(data.into())
    }

    /// Create a new Categorical series
    ///
    /// Categories are sorted so that codes follow the natural string order.
    pub fn categorical<T: AsRef<str>>(data: &[T]) -> Self {
        let labels: Vec<String> = data.iter().map(|s| s.as_ref().to_string()).collect();
        let categories = unique_values(&labels);

        // every label is present in `categories`, so the search always hits
        let encoded: Array1<u32> = labels
            .iter()
            .map(|label| {
                categories
                    .binary_search(label)
                    .map_or(0, |code| code as u32)
            })
            .collect();

        Series::Categorical(encoded, categories)
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        match self {
            Series::Float(arr) => arr.len(),
            Series::Int(arr) => arr.len(),
            Series::Bool(arr) => arr.len(),
            Series::String(arr) => arr.len(),
            Series::Categorical(arr, _) => arr.len(),
        }
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the type name of the series
    pub fn dtype(&self) -> &'static str {
        self.column_type().name()
    }

    /// Get the semantic type of the series
    pub fn column_type(&self) -> ColumnType {
        match self {
            Series::Float(_) => ColumnType::Float,
            Series::Int(_) => ColumnType::Int,
            Series::Bool(_) => ColumnType::Bool,
            Series::String(_) => ColumnType::String,
            Series::Categorical(_, _) => ColumnType::Categorical,
        }
    }

    /// Get a value at index
    pub fn get(&self, idx: usize) -> Option<SeriesValue> {
        match self {
            Series::Float(arr) => arr.get(idx).map(|&v| SeriesValue::Float(v)),
            Series::Int(arr) => arr.get(idx).map(|&v| SeriesValue::Int(v)),
            Series::Bool(arr) => arr.get(idx).map(|&v| SeriesValue::Bool(v)),
            Series::String(arr) => arr.get(idx).map(|v| SeriesValue::String(v.clone())),
            Series::Categorical(arr, cats) => arr
                .get(idx)
                .and_then(|&code| cats.get(code as usize))
                .map(|cat| SeriesValue::String(cat.clone())),
        }
    }

    /// Convert a numeric series to an array of floats
    ///
    /// Integers are widened and booleans map to 0/1. Category codes are not
    /// numbers, so categorical and string series are rejected.
    pub fn to_float_array(&self) -> Result<FloatArray> {
        match self {
            Series::Float(arr) => Ok(arr.clone()),
            Series::Int(arr) => Ok(arr.mapv(|v| v as f64)),
            Series::Bool(arr) => Ok(arr.mapv(|v| if v { 1.0 } else { 0.0 })),
            Series::String(_) => Err(DataError::NonNumericData("string")),
            Series::Categorical(_, _) => Err(DataError::NonNumericData("categorical")),
        }
    }

    /// Get the row labels of a string or categorical series
    pub fn to_labels(&self) -> Result<StringArray> {
        match self {
            Series::String(arr) => Ok(arr.clone()),
            Series::Categorical(codes, cats) => codes
                .iter()
                .map(|&code| {
                    cats.get(code as usize)
                        .cloned()
                        .ok_or_else(|| DataError::DimensionMismatch {
                            expected: format!("category code < {}", cats.len()),
                            actual: format!("code {}", code),
                        })
                })
                .collect(),
            other => Err(DataError::TypeMismatch {
                column: String::new(),
                expected: "categorical or string",
                actual: other.dtype(),
            }),
        }
    }
}

/// Enum for type-safe value access
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    String(String),
}

impl std::fmt::Display for SeriesValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesValue::Float(v) => write!(f, "{}", v),
            SeriesValue::Int(v) => write!(f, "{}", v),
            SeriesValue::Bool(v) => write!(f, "{}", v),
            SeriesValue::String(v) => write!(f, "{}", v),
        }
    }
}
