//! Run parameters and their validation.

/// Invalid search parameter, rejected before the loop starts.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParamError {
    #[display("population size must be at least 1")]
    EmptyPopulation,
    #[display("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f32 },
    #[display("early stop threshold must be non-negative, got {value}")]
    InvalidThreshold { value: f32 },
    #[display("patience must be at least 1")]
    ZeroPatience,
}

/// Parameters controlling one search run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Maximum number of generations to run.
    pub generations: usize,
    /// Fixed population size, restored every generation. At least 1.
    pub population_size: usize,
    /// Fraction of the population carried over as elites, in `[0, 1]`.
    /// The elite count is floored but never drops below 1.
    pub elite_rate: f32,
    /// Probability that an offspring is mutated (all attributes at once),
    /// in `[0, 1]`.
    pub mutation_rate: f32,
    /// Best-fitness change below which a generation counts as stagnant.
    pub early_stop_threshold: f32,
    /// Number of consecutive stagnant generations before stopping. At
    /// least 1.
    pub patience: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 20,
            elite_rate: 0.1,
            mutation_rate: 0.05,
            early_stop_threshold: 0.01,
            patience: 10,
        }
    }
}

impl SearchParams {
    /// Checks the caller contract.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if the population is empty, a rate lies
    /// outside `[0, 1]` (or is NaN), the threshold is negative or NaN, or
    /// patience is zero.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.population_size < 1 {
            return Err(ParamError::EmptyPopulation);
        }
        for (name, value) in [
            ("elite rate", self.elite_rate),
            ("mutation rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamError::RateOutOfRange { name, value });
            }
        }
        if self.early_stop_threshold.is_nan() || self.early_stop_threshold < 0.0 {
            return Err(ParamError::InvalidThreshold {
                value: self.early_stop_threshold,
            });
        }
        if self.patience < 1 {
            return Err(ParamError::ZeroPatience);
        }
        Ok(())
    }

    /// Number of elites per generation: `floor(population_size *
    /// elite_rate)`, floored at 1 so selection never returns an empty set.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f32 * self.elite_rate).floor() as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(SearchParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_population() {
        let params = SearchParams {
            population_size: 0,
            ..SearchParams::default()
        };
        assert!(matches!(params.validate(), Err(ParamError::EmptyPopulation)));
    }

    #[test]
    fn rejects_out_of_range_rates() {
        let params = SearchParams {
            elite_rate: 1.5,
            ..SearchParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::RateOutOfRange { name: "elite rate", .. })
        ));

        let params = SearchParams {
            mutation_rate: -0.1,
            ..SearchParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::RateOutOfRange { name: "mutation rate", .. })
        ));

        let params = SearchParams {
            mutation_rate: f32::NAN,
            ..SearchParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_invalid_threshold() {
        let params = SearchParams {
            early_stop_threshold: -0.01,
            ..SearchParams::default()
        };
        assert!(matches!(params.validate(), Err(ParamError::InvalidThreshold { .. })));

        let params = SearchParams {
            early_stop_threshold: f32::NAN,
            ..SearchParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_zero_patience() {
        let params = SearchParams {
            patience: 0,
            ..SearchParams::default()
        };
        assert!(matches!(params.validate(), Err(ParamError::ZeroPatience)));
    }

    #[test]
    fn elite_count_floors_but_never_hits_zero() {
        let params = SearchParams {
            population_size: 20,
            elite_rate: 0.1,
            ..SearchParams::default()
        };
        assert_eq!(params.elite_count(), 2);

        let params = SearchParams {
            population_size: 19,
            elite_rate: 0.1,
            ..SearchParams::default()
        };
        assert_eq!(params.elite_count(), 1);

        let params = SearchParams {
            population_size: 4,
            elite_rate: 0.0,
            ..SearchParams::default()
        };
        assert_eq!(params.elite_count(), 1);

        let params = SearchParams {
            population_size: 4,
            elite_rate: 1.0,
            ..SearchParams::default()
        };
        assert_eq!(params.elite_count(), 4);
    }
}
