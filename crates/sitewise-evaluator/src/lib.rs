//! Fitness evaluation: scoring a location under a weight vector.
//!
//! The score is a linear weighted sum over all criteria:
//!
//! ```text
//! fitness = Σ value_i * w_i
//! ```
//!
//! where `value_i` is the raw attribute for positive-polarity criteria and
//! `max - raw` for negative-polarity ones. The inversion means that with a
//! positive weight, a "better" real-world outcome always raises the score,
//! whether the underlying quantity is something to maximize (sunlight) or
//! minimize (cost).
//!
//! Evaluation is deterministic and side-effect free. The linear model is
//! simple, fast, and interpretable, but cannot capture interactions between
//! criteria.

use std::{fmt, iter};

use sitewise_model::{CriteriaConfig, Location, Polarity, WeightVector};

/// Scores candidate locations; higher is better.
///
/// The trait is the seam between the search loop and the scoring model: the
/// search only ever asks for a scalar score, so alternative models (or test
/// doubles) can stand in for the weighted sum.
pub trait LocationEvaluator: fmt::Debug {
    /// Evaluates a location under the given weight vector.
    fn evaluate(&self, location: &Location, weights: &WeightVector) -> f32;
}

/// Polarity-adjusted linear weighted sum over the configured criteria.
#[derive(Debug, Clone)]
pub struct WeightedCriteriaEvaluator {
    config: CriteriaConfig,
}

impl WeightedCriteriaEvaluator {
    #[must_use]
    pub fn new(config: CriteriaConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CriteriaConfig {
        &self.config
    }
}

impl LocationEvaluator for WeightedCriteriaEvaluator {
    fn evaluate(&self, location: &Location, weights: &WeightVector) -> f32 {
        debug_assert_eq!(location.values().len(), self.config.len());
        debug_assert_eq!(weights.len(), self.config.len());

        let max = self.config.range().max;
        iter::zip(self.config.criteria(), iter::zip(location.values(), weights.values()))
            .map(|(criterion, (&raw, &weight))| {
                let value = match criterion.polarity() {
                    Polarity::Positive => raw,
                    Polarity::Negative => max - raw,
                };
                value * weight
            })
            .sum()
    }
}
