//! Tests for data module

use super::*;

#[test]
fn test_series_creation() {
    // Test float series
    let float_series = Series::float(vec![1.0, 2.0, 3.0]);
    assert_eq!(float_series.len(), 3);
    assert_eq!(float_series.dtype(), "float64");

    // Test int series
    let int_series = Series::int(vec![1, 2, 3]);
    assert_eq!(int_series.len(), 3);
    assert_eq!(int_series.dtype(), "int64");

    // Test bool series
    let bool_series = Series::bool(vec![true, false, true]);
    assert_eq!(bool_series.len(), 3);
    assert_eq!(bool_series.dtype(), "bool");

    // Test string series
    let string_series = Series::string(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(string_series.len(), 2);
    assert_eq!(string_series.dtype(), "string");

    // Test categorical series
    let cat_series = Series::categorical(&["A", "B", "A", "C"]);
    assert_eq!(cat_series.len(), 4);
    assert_eq!(cat_series.dtype(), "categorical");
}

#[test]
fn test_categorical_encoding_is_sorted() {
    let series = Series::categorical(&["control", "drug", "control", "alpha"]);

    match &series {
        Series::Categorical(codes, categories) => {
            assert_eq!(categories, &vec!["alpha", "control", "drug"]);
            assert_eq!(codes.to_vec(), vec![1, 2, 1, 0]);
        }
        _ => panic!("Expected Categorical series"),
    }

    assert_eq!(series.get(3), Some(SeriesValue::String("alpha".to_string())));
    assert_eq!(series.get(4), None);
}

#[test]
fn test_series_to_float_array() {
    let ints = Series::int(vec![1, 2, 3]).to_float_array().unwrap();
    assert_eq!(ints.to_vec(), vec![1.0, 2.0, 3.0]);

    let bools = Series::bool(vec![true, false]).to_float_array().unwrap();
    assert_eq!(bools.to_vec(), vec![1.0, 0.0]);

    let cats = Series::categorical(&["a", "b"]).to_float_array();
    assert_eq!(cats, Err(DataError::NonNumericData("categorical")));
}

#[test]
fn test_series_to_labels() {
    let labels = Series::categorical(&["b", "a", "b"]).to_labels().unwrap();
    assert_eq!(labels, vec!["b", "a", "b"]);

    assert!(Series::float(vec![1.0]).to_labels().is_err());
}

#[test]
fn test_dataframe_creation() {
    let df = DataFrame::from_columns(vec![
        ("x", Series::float(vec![1.0, 2.0, 3.0])),
        ("y", Series::int(vec![4, 5, 6])),
    ])
    .unwrap();

    assert_eq!(df.shape(), (3, 2));
    assert_eq!(df.column_names(), vec!["x", "y"]);
    assert_eq!(df.to_string(), "DataFrame(3 rows × 2 cols)");
}

#[test]
fn test_builder_pattern() {
    let df = DataFrameBuilder::new()
        .with_column("x", Series::float(vec![1.0, 2.0, 3.0]))
        .unwrap()
        .with_column("y", Series::int(vec![4, 5, 6]))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(df.shape(), (3, 2));
}

#[test]
fn test_builder_rejects_ragged_columns() {
    let result = DataFrameBuilder::new()
        .with_column("x", Series::float(vec![1.0, 2.0, 3.0]))
        .unwrap()
        .with_column("y", Series::float(vec![1.0, 2.0]));

    assert!(matches!(result, Err(DataError::DimensionMismatch { .. })));
}

#[test]
fn test_duplicate_column() {
    let builder = DataFrameBuilder::new()
        .with_column("x", Series::float(vec![1.0]))
        .unwrap();

    let result = builder.with_column("x", Series::float(vec![2.0]));
    assert!(matches!(result, Err(DataError::DuplicateColumn(name)) if name == "x"));

    let result = DataFrame::from_columns([
        ("y", Series::float(vec![1.0])),
        ("y", Series::float(vec![2.0])),
    ]);
    assert_eq!(result.unwrap_err(), DataError::DuplicateColumn("y".to_string()));

    let df = DataFrame::new().with_column("z", Series::int(vec![1, 2])).unwrap();
    assert_eq!(df.nrows(), 2);
    assert!(df.clone().with_column("z", Series::int(vec![3, 4])).is_err());
    assert!(matches!(
        df.with_column("w", Series::int(vec![3])),
        Err(DataError::DimensionMismatch { .. })
    ));
}

// ==================== ColumnSource Tests ====================

fn mixed_frame() -> DataFrame {
    DataFrameBuilder::new()
        .with_column("score", Series::float(vec![1.5, 2.5, 3.5]))
        .unwrap()
        .with_column("count", Series::int(vec![1, 2, 3]))
        .unwrap()
        .with_column("group", Series::categorical(&["B", "A", "B"]))
        .unwrap()
        .with_column(
            "site",
            Series::string(vec!["x".to_string(), "y".to_string(), "x".to_string()]),
        )
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn test_column_source_types() {
    let df = mixed_frame();

    assert_eq!(ColumnSource::nrows(&df), 3);
    assert_eq!(df.column_type("score"), Some(ColumnType::Float));
    assert_eq!(df.column_type("count"), Some(ColumnType::Int));
    assert_eq!(df.column_type("group"), Some(ColumnType::Categorical));
    assert_eq!(df.column_type("missing"), None);
    assert!(ColumnSource::has_column(&df, "site"));
}

#[test]
fn test_column_source_numeric_access() {
    let df = mixed_frame();

    assert_eq!(df.numeric_column("count").unwrap().to_vec(), vec![1.0, 2.0, 3.0]);

    match df.numeric_column("group") {
        Err(DataError::TypeMismatch { column, expected, .. }) => {
            assert_eq!(column, "group");
            assert_eq!(expected, "numeric");
        }
        other => panic!("Expected TypeMismatch, got {:?}", other),
    }

    assert_eq!(
        df.numeric_column("nope"),
        Err(DataError::ColumnNotFound("nope".to_string()))
    );
}

#[test]
fn test_column_source_categorical_access() {
    let df = mixed_frame();

    assert_eq!(df.categorical_column("group").unwrap(), vec!["B", "A", "B"]);
    assert_eq!(df.categorical_column("site").unwrap(), vec!["x", "y", "x"]);
    assert!(matches!(
        df.categorical_column("score"),
        Err(DataError::TypeMismatch { .. })
    ));
}
