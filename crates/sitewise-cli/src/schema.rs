//! JSON schema of the search report written by the `search` command.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sitewise_model::CriteriaConfig;
use sitewise_search::{SearchOutcome, StopReason};

/// The winning location, with attribute values keyed by criterion label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestLocation {
    pub id: u32,
    pub attributes: BTreeMap<String, f32>,
}

/// Final result of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub completed_at: DateTime<Utc>,
    /// Generation at which early stopping fired, if it did.
    pub stopped_early: Option<usize>,
    pub fitness: f32,
    pub best_location: BestLocation,
    /// The weight vector the run scored under, keyed by criterion id.
    pub weights: BTreeMap<String, f32>,
}

impl SearchReport {
    pub fn new(config: &CriteriaConfig, outcome: &SearchOutcome) -> Self {
        let attributes = config
            .criteria()
            .iter()
            .zip(outcome.best.values())
            .map(|(criterion, &value)| (criterion.label().to_owned(), value))
            .collect();
        let weights = config
            .criteria()
            .iter()
            .zip(outcome.weights.values())
            .map(|(criterion, &weight)| (criterion.id().to_owned(), weight))
            .collect();
        Self {
            completed_at: Utc::now(),
            stopped_early: match outcome.stop {
                StopReason::Converged { generation } => Some(generation),
                StopReason::Exhausted => None,
            },
            fitness: outcome.best_fitness,
            best_location: BestLocation {
                id: outcome.best.id(),
                attributes,
            },
            weights,
        }
    }
}
