//! Utility types and functions for data operations

use std::collections::BTreeSet;
use std::fmt;

/// Column type information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Float,
    Int,
    Bool,
    String,
    Categorical,
}

impl ColumnType {
    /// Check if type is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Float | ColumnType::Int | ColumnType::Bool)
    }

    /// Check if type holds labels (categorical or plain strings)
    pub fn is_categorical(&self) -> bool {
        matches!(self, ColumnType::Categorical | ColumnType::String)
    }

    /// Check if type takes a small set of exact values that can define groups
    pub fn is_discrete(&self) -> bool {
        !matches!(self, ColumnType::Float)
    }

    /// Short dtype name
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Float => "float64",
            ColumnType::Int => "int64",
            ColumnType::Bool => "bool",
            ColumnType::String => "string",
            ColumnType::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the distinct values in a slice, sorted ascending
pub fn unique_values<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    data.iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_values_sorted() {
        let values = ["b", "a", "c", "a", "b"];
        assert_eq!(unique_values(&values), vec!["a", "b", "c"]);
        assert_eq!(unique_values(&[10, 2, 10, 1]), vec![1, 2, 10]);
    }

    #[test]
    fn test_column_type_classes() {
        assert!(ColumnType::Int.is_numeric());
        assert!(ColumnType::Bool.is_numeric());
        assert!(!ColumnType::Categorical.is_numeric());
        assert!(ColumnType::String.is_categorical());
        assert!(!ColumnType::Float.is_categorical());
        assert!(ColumnType::Int.is_discrete());
        assert!(ColumnType::Categorical.is_discrete());
        assert!(!ColumnType::Float.is_discrete());
        assert_eq!(ColumnType::Float.to_string(), "float64");
    }
}
