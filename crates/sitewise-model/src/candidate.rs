//! Candidate solutions: locations and weight vectors.
//!
//! A [`Location`] is one candidate site - an identifier plus one attribute
//! value per configured criterion, every value within the configuration's
//! shared range. A [`WeightVector`] holds one importance multiplier per
//! criterion in the same order.
//!
//! Both are plain value types: genetic operators build new records instead
//! of mutating shared ones, so elites carried across generations can never
//! be modified through an alias.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::CriteriaConfig;

/// One candidate solution: an id plus one attribute value per criterion.
///
/// The id is unique within a population at initialization but not stable
/// across generations; crossover reuses the first parent's id for the child.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: u32,
    values: Vec<f32>,
}

impl Location {
    /// Creates a location from explicit attribute values.
    ///
    /// `values` must be ordered like the configuration's criteria.
    #[must_use]
    pub fn new(id: u32, values: Vec<f32>) -> Self {
        Self { id, values }
    }

    /// Creates a location with each attribute sampled uniformly from the
    /// configured range.
    #[must_use]
    pub fn random<R>(config: &CriteriaConfig, id: u32, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let range = config.range();
        let values = config
            .criteria()
            .iter()
            .map(|_| rng.random_range(range.min..=range.max))
            .collect();
        Self { id, values }
    }

    /// Creates `size` random locations with ids `1..=size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or does not fit in `u32`.
    #[must_use]
    pub fn random_population<R>(config: &CriteriaConfig, size: usize, rng: &mut R) -> Vec<Self>
    where
        R: Rng + ?Sized,
    {
        assert!(size >= 1, "population size must be at least 1");
        (1..=u32::try_from(size).expect("population size fits in u32"))
            .map(|id| Self::random(config, id, rng))
            .collect()
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Attribute values in criteria order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Per-criterion importance multipliers, conventionally in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f32>);

impl WeightVector {
    /// Creates a weight vector from explicit values in criteria order.
    #[must_use]
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// Samples a weight vector around the configured defaults.
    ///
    /// Each weight starts from its criterion's default, gets uniform noise
    /// from `[-0.1, 0.1)`, and is clamped to `[-1, 1]`.
    #[must_use]
    pub fn jittered<R>(config: &CriteriaConfig, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let values = config
            .criteria()
            .iter()
            .map(|criterion| {
                let noise = (rng.random::<f32>() - 0.5) * 0.2;
                (criterion.default_weight() + noise).clamp(-1.0, 1.0)
            })
            .collect();
        Self(values)
    }

    /// Weights in criteria order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::config::{Criterion, Polarity, ValueRange};

    fn config() -> CriteriaConfig {
        CriteriaConfig::new(
            vec![
                Criterion::new("sunlight", "Sunlight", Polarity::Positive, 0.8),
                Criterion::new("distance", "Distance", Polarity::Negative, -0.5),
                Criterion::new("cost", "Cost", Polarity::Negative, -0.7),
            ],
            ValueRange { min: 0.0, max: 10.0 },
        )
        .unwrap()
    }

    #[test]
    fn random_location_stays_in_range() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..100 {
            let location = Location::random(&config, id, &mut rng);
            assert_eq!(location.values().len(), config.len());
            for &value in location.values() {
                assert!(config.range().contains(value), "{value} out of range");
            }
        }
    }

    #[test]
    fn random_population_assigns_sequential_ids() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(7);
        let population = Location::random_population(&config, 5, &mut rng);
        assert_eq!(population.len(), 5);
        let ids = population.iter().map(Location::id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "population size must be at least 1")]
    fn empty_population_is_rejected() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(7);
        let _ = Location::random_population(&config, 0, &mut rng);
    }

    #[test]
    fn jittered_weights_stay_near_defaults_and_clamped() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..100 {
            let weights = WeightVector::jittered(&config, &mut rng);
            assert_eq!(weights.len(), config.len());
            for (weight, criterion) in weights.values().iter().zip(config.criteria()) {
                assert!((weight - criterion.default_weight()).abs() <= 0.1 + f32::EPSILON);
                assert!((-1.0..=1.0).contains(weight));
            }
        }
    }

    #[test]
    fn jittered_weights_clamp_at_bounds() {
        let config = CriteriaConfig::new(
            vec![Criterion::new("a", "A", Polarity::Positive, 1.0)],
            ValueRange { min: 0.0, max: 1.0 },
        )
        .unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        // Default weight sits on the upper bound; positive noise must clamp.
        for _ in 0..100 {
            let weights = WeightVector::jittered(&config, &mut rng);
            assert!(weights.values()[0] <= 1.0);
        }
    }

    #[test]
    fn weight_vector_serializes_as_plain_sequence() {
        let weights = WeightVector::new(vec![0.5, -0.25]);
        let json = serde_json::to_string(&weights).unwrap();
        assert_eq!(json, "[0.5,-0.25]");
        let parsed: WeightVector = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, weights);
    }
}
