//! Core data structures for CovOxide
//!
//! The statistical models in `co-models` never touch a concrete table type.
//! They read columns through the [`data::ColumnSource`] trait; the
//! [`data::DataFrame`] defined here is the reference implementation of it.

pub mod data;

pub use data::{
    ColumnSource, ColumnType, DataError, DataFrame, DataFrameBuilder, Series, SeriesValue,
};
