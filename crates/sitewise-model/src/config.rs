//! Criteria configuration: the scored dimensions of a search.
//!
//! A configuration arrives in raw form ([`RawCriteriaConfig`], the shape
//! users write in JSON) and is validated into a [`CriteriaConfig`] before
//! anything else runs. Validation is deliberately strict: mismatched list
//! lengths, duplicate or unknown ids, a missing default weight, or an empty
//! value range all fail at setup rather than silently zeroing a criterion
//! mid-search.
//!
//! The validated form is immutable for the duration of a run and is passed
//! explicitly to generators, the fitness evaluator, and the genetic
//! operators.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Whether a higher raw attribute value is better or worse for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Higher raw value scores better (e.g. sunlight hours).
    Positive,
    /// Lower raw value scores better (e.g. installation cost).
    Negative,
}

/// The numeric range shared by all criteria in a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Returns whether `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One scored dimension of a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    id: String,
    label: String,
    polarity: Polarity,
    default_weight: f32,
}

impl Criterion {
    #[must_use]
    pub fn new(id: &str, label: &str, polarity: Polarity, default_weight: f32) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            polarity,
            default_weight,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable display name, used in reports.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Default importance weight, the starting point for jittered weight
    /// generation.
    #[must_use]
    pub fn default_weight(&self) -> f32 {
        self.default_weight
    }
}

/// Validation failure in a criteria configuration.
///
/// All variants are fatal and detected at setup, before any generation runs.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("criteria and labels differ in length ({criteria} ids, {labels} labels)")]
    LengthMismatch { criteria: usize, labels: usize },
    #[display("configuration contains no criteria")]
    EmptyCriteria,
    #[display("duplicate criterion id '{id}'")]
    DuplicateCriterion { id: String },
    #[display("invalid value range: min {min} is not below max {max}")]
    InvalidRange { min: f32, max: f32 },
    #[display("criterion '{id}' has no default weight")]
    MissingDefaultWeight { id: String },
    #[display("'{id}' in {field} does not name a configured criterion")]
    UnknownCriterion { field: &'static str, id: String },
}

/// Validated, immutable criteria configuration.
///
/// Criteria keep their declared order; every `Location` and `WeightVector`
/// built against this configuration stores its values in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaConfig {
    criteria: Vec<Criterion>,
    range: ValueRange,
}

impl CriteriaConfig {
    /// Builds a configuration from already-constructed criteria.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the criteria list is empty, an id repeats,
    /// or the range is empty (`min >= max`).
    pub fn new(criteria: Vec<Criterion>, range: ValueRange) -> Result<Self, ConfigError> {
        if criteria.is_empty() {
            return Err(ConfigError::EmptyCriteria);
        }
        if range.min >= range.max {
            return Err(ConfigError::InvalidRange {
                min: range.min,
                max: range.max,
            });
        }
        let mut seen = BTreeSet::new();
        for criterion in &criteria {
            if !seen.insert(criterion.id()) {
                return Err(ConfigError::DuplicateCriterion {
                    id: criterion.id().to_owned(),
                });
            }
        }
        Ok(Self { criteria, range })
    }

    /// Criteria in declared order.
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// The value range shared by all criteria.
    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Number of criteria (the length of every location and weight vector).
    #[must_use]
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Looks up the position of a criterion by id.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c.id() == id)
    }
}

/// Criteria configuration as written by users (e.g. in a JSON file).
///
/// The raw shape keeps the parallel-list layout of the external contract:
/// ordered ids, matching ordered labels, one shared range, a subset of ids
/// flagged as negative impact, and a default weight per id. [`Self::build`]
/// turns it into a validated [`CriteriaConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCriteriaConfig {
    /// Ordered criterion ids.
    pub criteria: Vec<String>,
    /// Display labels, same length and order as `criteria`.
    pub labels: Vec<String>,
    /// Value range shared by all criteria.
    pub range: ValueRange,
    /// Ids whose higher raw value is worse.
    #[serde(default)]
    pub negative_impact: Vec<String>,
    /// Default weight per id; every id in `criteria` must appear.
    pub default_weights: BTreeMap<String, f32>,
}

impl RawCriteriaConfig {
    /// Validates the raw configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on mismatched list lengths, duplicate ids, an
    /// empty range, a criterion without a default weight, or an entry in
    /// `negative_impact` / `default_weights` that names no configured
    /// criterion.
    pub fn build(&self) -> Result<CriteriaConfig, ConfigError> {
        if self.criteria.len() != self.labels.len() {
            return Err(ConfigError::LengthMismatch {
                criteria: self.criteria.len(),
                labels: self.labels.len(),
            });
        }
        let ids = self.criteria.iter().map(String::as_str).collect::<BTreeSet<_>>();
        for id in &self.negative_impact {
            if !ids.contains(id.as_str()) {
                return Err(ConfigError::UnknownCriterion {
                    field: "negative_impact",
                    id: id.clone(),
                });
            }
        }
        for id in self.default_weights.keys() {
            if !ids.contains(id.as_str()) {
                return Err(ConfigError::UnknownCriterion {
                    field: "default_weights",
                    id: id.clone(),
                });
            }
        }

        let criteria = self
            .criteria
            .iter()
            .zip(&self.labels)
            .map(|(id, label)| {
                let polarity = if self.negative_impact.iter().any(|n| n == id) {
                    Polarity::Negative
                } else {
                    Polarity::Positive
                };
                let default_weight = self
                    .default_weights
                    .get(id)
                    .copied()
                    .ok_or_else(|| ConfigError::MissingDefaultWeight { id: id.clone() })?;
                Ok(Criterion::new(id, label, polarity, default_weight))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        CriteriaConfig::new(criteria, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawCriteriaConfig {
        RawCriteriaConfig {
            criteria: vec!["sunlight".to_owned(), "cost".to_owned()],
            labels: vec!["Sunlight".to_owned(), "Installation cost".to_owned()],
            range: ValueRange { min: 0.0, max: 10.0 },
            negative_impact: vec!["cost".to_owned()],
            default_weights: [("sunlight".to_owned(), 0.8), ("cost".to_owned(), -0.7)]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn builds_valid_config_in_declared_order() {
        let config = raw().build().unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(config.criteria()[0].id(), "sunlight");
        assert_eq!(config.criteria()[0].polarity(), Polarity::Positive);
        assert_eq!(config.criteria()[1].id(), "cost");
        assert_eq!(config.criteria()[1].polarity(), Polarity::Negative);
        assert_eq!(config.criteria()[1].label(), "Installation cost");
        assert_eq!(config.position("cost"), Some(1));
        assert_eq!(config.position("terrain"), None);
    }

    #[test]
    fn rejects_length_mismatch() {
        let mut bad = raw();
        bad.labels.pop();
        assert!(matches!(
            bad.build(),
            Err(ConfigError::LengthMismatch { criteria: 2, labels: 1 })
        ));
    }

    #[test]
    fn rejects_empty_criteria() {
        let bad = RawCriteriaConfig {
            criteria: vec![],
            labels: vec![],
            range: ValueRange { min: 0.0, max: 1.0 },
            negative_impact: vec![],
            default_weights: BTreeMap::new(),
        };
        assert!(matches!(bad.build(), Err(ConfigError::EmptyCriteria)));
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut bad = raw();
        bad.criteria[1] = "sunlight".to_owned();
        bad.negative_impact.clear();
        bad.default_weights.remove("cost");
        assert!(matches!(
            bad.build(),
            Err(ConfigError::DuplicateCriterion { id }) if id == "sunlight"
        ));
    }

    #[test]
    fn rejects_empty_range() {
        let mut bad = raw();
        bad.range = ValueRange { min: 5.0, max: 5.0 };
        assert!(matches!(bad.build(), Err(ConfigError::InvalidRange { .. })));
    }

    #[test]
    fn rejects_missing_default_weight() {
        let mut bad = raw();
        bad.default_weights.remove("cost");
        assert!(matches!(
            bad.build(),
            Err(ConfigError::MissingDefaultWeight { id }) if id == "cost"
        ));
    }

    #[test]
    fn rejects_unknown_id_in_negative_impact() {
        let mut bad = raw();
        // The typo class the original data actually shipped.
        bad.negative_impact.push("terrian".to_owned());
        assert!(matches!(
            bad.build(),
            Err(ConfigError::UnknownCriterion { field: "negative_impact", id }) if id == "terrian"
        ));
    }

    #[test]
    fn rejects_unknown_id_in_default_weights() {
        let mut bad = raw();
        bad.default_weights.insert("terrain".to_owned(), 0.6);
        assert!(matches!(
            bad.build(),
            Err(ConfigError::UnknownCriterion { field: "default_weights", id }) if id == "terrain"
        ));
    }

    #[test]
    fn raw_config_json_roundtrip() {
        let json = serde_json::to_string(&raw()).unwrap();
        let parsed: RawCriteriaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.criteria, raw().criteria);
        assert!(parsed.build().is_ok());
    }

    #[test]
    fn range_clamp_and_contains() {
        let range = ValueRange { min: 0.0, max: 10.0 };
        assert_eq!(range.clamp(-1.0), 0.0);
        assert_eq!(range.clamp(12.5), 10.0);
        assert_eq!(range.clamp(3.0), 3.0);
        assert!(range.contains(0.0));
        assert!(range.contains(10.0));
        assert!(!range.contains(10.1));
    }
}
