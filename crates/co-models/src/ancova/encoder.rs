//! Treatment (dummy) coding of a grouping factor

use log::trace;
use serde::Serialize;
use std::fmt::Display;

use co_core::data::unique_values;

use crate::base::{ModelError, Result, Vector};

/// Sorted distinct levels of a factor; the first is the reference level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupLevels(Vec<String>);

impl GroupLevels {
    /// Reference level, absorbed by the intercept
    pub fn reference(&self) -> &str {
        &self.0[0]
    }

    /// Levels that get an indicator column
    pub fn non_reference(&self) -> &[String] {
        &self.0[1..]
    }

    /// Number of levels, the reference included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no level was observed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All levels in sort order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Position of a level in sort order
    pub fn position(&self, level: &str) -> Option<usize> {
        self.0.iter().position(|l| l == level)
    }
}

/// A factor expanded into indicator columns
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFactor {
    /// Factor (column) name
    pub name: String,
    /// Levels in sort order
    pub levels: GroupLevels,
    /// One `(name, 0/1 column)` per non-reference level, in level order
    pub indicators: Vec<(String, Vector)>,
}

impl EncodedFactor {
    /// Indicator column names, in level order
    pub fn indicator_names(&self) -> Vec<String> {
        self.indicators.iter().map(|(name, _)| name.clone()).collect()
    }
}

/// Encodes group values into treatment-coded indicator columns
pub struct CategoricalEncoder;

impl CategoricalEncoder {
    /// Name of the indicator column for `level` of factor `name`
    pub fn indicator_name(name: &str, level: &str) -> String {
        format!("{}_{}", name, level)
    }

    /// Encode `labels` with the first level (in sort order) as reference
    ///
    /// Fails when fewer than two distinct levels are present.
    pub fn encode(name: &str, labels: &[String]) -> Result<EncodedFactor> {
        Self::encode_values(name, labels)
    }

    /// Encode any ordered values, e.g. integer dose codes
    ///
    /// Levels follow the ordering of `T`, so integer codes sort numerically.
    /// Levels and indicator names use the `Display` form of each value.
    pub fn encode_values<T>(name: &str, values: &[T]) -> Result<EncodedFactor>
    where
        T: Ord + Clone + Display,
    {
        let levels = unique_values(values);

        if levels.len() < 2 {
            return Err(ModelError::validation(
                name,
                format!(
                    "grouping factor needs at least two levels, found {}",
                    levels.len()
                ),
            ));
        }

        let indicators = levels[1..]
            .iter()
            .map(|level| {
                let column: Vector = values
                    .iter()
                    .map(|value| if value == level { 1.0 } else { 0.0 })
                    .collect();
                (Self::indicator_name(name, &level.to_string()), column)
            })
            .collect();

        let levels: Vec<String> = levels.iter().map(ToString::to_string).collect();
        trace!("Encoded '{}' with levels {:?}", name, levels);

        Ok(EncodedFactor {
            name: name.to_string(),
            levels: GroupLevels(levels),
            indicators,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_encode_sorts_levels_and_drops_reference() {
        let encoded =
            CategoricalEncoder::encode("group", &labels(&["C", "A", "B", "A", "C"])).unwrap();

        assert_eq!(encoded.levels.as_slice(), &["A", "B", "C"]);
        assert_eq!(encoded.levels.reference(), "A");
        assert_eq!(encoded.indicator_names(), vec!["group_B", "group_C"]);
        assert_eq!(encoded.indicators[0].1, array![0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(encoded.indicators[1].1, array![1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_each_row_has_at_most_one_indicator() {
        let encoded =
            CategoricalEncoder::encode("g", &labels(&["x", "y", "z", "x", "z", "y"])).unwrap();

        for row in 0..6 {
            let total: f64 = encoded.indicators.iter().map(|(_, c)| c[row]).sum();
            assert!(total == 0.0 || total == 1.0);
        }
        assert_eq!(encoded.levels.position("z"), Some(2));
        assert_eq!(encoded.levels.non_reference(), &["y", "z"]);
    }

    #[test]
    fn test_integer_codes_sort_numerically() {
        let encoded = CategoricalEncoder::encode_values("dose", &[10, 2, 10, 1, 2]).unwrap();

        assert_eq!(encoded.levels.as_slice(), &["1", "2", "10"]);
        assert_eq!(encoded.levels.reference(), "1");
        assert_eq!(encoded.indicator_names(), vec!["dose_2", "dose_10"]);
        assert_eq!(encoded.indicators[1].1, array![1.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_single_level_rejected() {
        match CategoricalEncoder::encode("group", &labels(&["A", "A", "A"])) {
            Err(ModelError::Validation { column, message }) => {
                assert_eq!(column, "group");
                assert!(message.contains("found 1"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }

        assert!(CategoricalEncoder::encode("group", &[]).is_err());
    }
}
