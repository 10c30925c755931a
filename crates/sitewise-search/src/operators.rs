//! Genetic operators: elitist selection, mean crossover, bounded mutation.
//!
//! All operators are free functions over value-semantic [`Location`]s; none
//! of them touches ambient state, so they can be exercised in isolation with
//! a seeded RNG.

use std::iter;

use rand::Rng;
use sitewise_evaluator::LocationEvaluator;
use sitewise_model::{CriteriaConfig, Location, WeightVector};

/// Selects the `elite_count` best locations by fitness.
///
/// The population is scored once and stable-sorted descending, so locations
/// with equal fitness keep their current order and repeated runs stay
/// reproducible. If `elite_count` exceeds the population length, the whole
/// sorted population is returned.
///
/// # Panics
///
/// Panics if `elite_count` is zero.
#[must_use]
pub fn select_elites<E>(
    population: &[Location],
    evaluator: &E,
    weights: &WeightVector,
    elite_count: usize,
) -> Vec<Location>
where
    E: LocationEvaluator + ?Sized,
{
    assert!(elite_count >= 1, "elite count must be at least 1");
    let mut scored = population
        .iter()
        .map(|location| (evaluator.evaluate(location, weights), location))
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(elite_count)
        .map(|(_, location)| location.clone())
        .collect()
}

/// Blends two parents into a child by arithmetic mean.
///
/// The child takes its id from `parent1`. The mean of two in-range values is
/// in range, so no clamping is needed.
#[must_use]
pub fn crossover(parent1: &Location, parent2: &Location) -> Location {
    debug_assert_eq!(parent1.values().len(), parent2.values().len());
    let values = iter::zip(parent1.values(), parent2.values())
        .map(|(a, b)| (a + b) / 2.0)
        .collect();
    Location::new(parent1.id(), values)
}

/// Mutates a location with probability `mutation_rate`.
///
/// The decision is all-or-nothing per offspring, not per attribute: when it
/// fires, every attribute is shifted by uniform noise from `[-0.5, 0.5)` and
/// clamped back into the configured range; otherwise the location is
/// returned untouched.
#[must_use]
pub fn mutate<R>(
    config: &CriteriaConfig,
    location: Location,
    mutation_rate: f32,
    rng: &mut R,
) -> Location
where
    R: Rng + ?Sized,
{
    if !rng.random_bool(f64::from(mutation_rate)) {
        return location;
    }
    let range = config.range();
    let values = location
        .values()
        .iter()
        .map(|&value| range.clamp(value + rng.random::<f32>() - 0.5))
        .collect();
    Location::new(location.id(), values)
}
