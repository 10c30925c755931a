//! The generational evolution loop.

use rand::{Rng, seq::IndexedRandom as _};
use sitewise_evaluator::{LocationEvaluator, WeightedCriteriaEvaluator};
use sitewise_model::{CriteriaConfig, Location, WeightVector};
use sitewise_stats::DescriptiveStats;

use crate::{
    operators,
    params::{ParamError, SearchParams},
};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StopReason {
    /// Early stopping fired: best fitness stayed within the threshold for
    /// `patience` consecutive generations. `generation` is the zero-based
    /// index of the last generation that ran.
    Converged { generation: usize },
    /// All configured generations ran without convergence.
    Exhausted,
}

/// Snapshot handed to the progress observer after each generation.
#[derive(Debug)]
pub struct GenerationSummary<'a> {
    /// Zero-based generation index.
    pub generation: usize,
    /// Fitness of the best individual in the new population.
    pub best_fitness: f32,
    /// Fitness spread of the whole new population.
    pub fitness: DescriptiveStats,
    /// The new population itself (read-only; replaced next generation).
    pub population: &'a [Location],
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best location of the final population.
    pub best: Location,
    /// The weight vector the run scored under: the caller's custom vector
    /// unchanged, or the jittered vector sampled at initialization.
    pub weights: WeightVector,
    /// Fitness of `best` under `weights`.
    pub best_fitness: f32,
    /// Why the run ended.
    pub stop: StopReason,
}

/// A configured search, ready to run.
///
/// Owns the criteria configuration (through its evaluator) and validated
/// parameters; each [`Self::run`] owns its population exclusively, so one
/// `Search` can drive many independent runs.
#[derive(Debug, Clone)]
pub struct Search {
    evaluator: WeightedCriteriaEvaluator,
    params: SearchParams,
    elite_count: usize,
}

impl Search {
    /// Builds a search over `config` with `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if the parameters violate the caller contract
    /// (empty population, rate outside `[0, 1]`, negative threshold, zero
    /// patience).
    pub fn new(config: CriteriaConfig, params: SearchParams) -> Result<Self, ParamError> {
        params.validate()?;
        let elite_count = params.elite_count();
        Ok(Self {
            evaluator: WeightedCriteriaEvaluator::new(config),
            params,
            elite_count,
        })
    }

    #[must_use]
    pub fn config(&self) -> &CriteriaConfig {
        self.evaluator.config()
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Elites carried over each generation, `max(1, floor(population_size *
    /// elite_rate))`.
    #[must_use]
    pub fn elite_count(&self) -> usize {
        self.elite_count
    }

    /// Runs the search to completion.
    ///
    /// `custom_weights` disables weight sampling: the vector is used as-is
    /// for every fitness evaluation and returned unchanged in the outcome.
    /// Without it, a single default-with-jitter vector is sampled up front.
    pub fn run<R>(&self, rng: &mut R, custom_weights: Option<WeightVector>) -> SearchOutcome
    where
        R: Rng + ?Sized,
    {
        self.run_with_progress(rng, custom_weights, |_| {})
    }

    /// Like [`Self::run`], but invokes `on_generation` with a summary after
    /// every completed generation (for progress reporting).
    pub fn run_with_progress<R, F>(
        &self,
        rng: &mut R,
        custom_weights: Option<WeightVector>,
        mut on_generation: F,
    ) -> SearchOutcome
    where
        R: Rng + ?Sized,
        F: FnMut(&GenerationSummary<'_>),
    {
        let config = self.evaluator.config();
        let mut population =
            Location::random_population(config, self.params.population_size, rng);
        let weights =
            custom_weights.unwrap_or_else(|| WeightVector::jittered(config, rng));

        // Seeding the best-so-far from the initial population keeps the
        // stagnation delta finite from the first generation on, so an
        // unbounded threshold stops after exactly one generation.
        let mut best_fitness = self.best_fitness_of(&population, &weights);
        let mut no_improvement = 0;
        let mut stop = StopReason::Exhausted;

        for generation in 0..self.params.generations {
            let selected =
                operators::select_elites(&population, &self.evaluator, &weights, self.elite_count);

            // Elites carry over untouched; offspring are bred from the
            // elite set only, which is where the selection pressure of this
            // algorithm comes from.
            let mut next = selected.clone();
            while next.len() < self.params.population_size {
                let parent1 = selected.choose(rng).expect("elite set is never empty");
                let parent2 = selected.choose(rng).expect("elite set is never empty");
                let child = operators::crossover(parent1, parent2);
                next.push(operators::mutate(config, child, self.params.mutation_rate, rng));
            }
            population = next;

            let current = self.best_fitness_of(&population, &weights);
            on_generation(&GenerationSummary {
                generation,
                best_fitness: current,
                fitness: DescriptiveStats::new(
                    population
                        .iter()
                        .map(|location| self.evaluator.evaluate(location, &weights)),
                )
                .expect("population is never empty"),
                population: &population,
            });

            if (current - best_fitness).abs() < self.params.early_stop_threshold {
                no_improvement += 1;
                if no_improvement >= self.params.patience {
                    stop = StopReason::Converged { generation };
                    break;
                }
            } else {
                no_improvement = 0;
                best_fitness = current;
            }
        }

        let best = operators::select_elites(&population, &self.evaluator, &weights, 1)
            .pop()
            .expect("population is never empty");
        let best_fitness = self.evaluator.evaluate(&best, &weights);
        SearchOutcome {
            best,
            weights,
            best_fitness,
            stop,
        }
    }

    fn best_fitness_of(&self, population: &[Location], weights: &WeightVector) -> f32 {
        let best = operators::select_elites(population, &self.evaluator, weights, 1);
        self.evaluator.evaluate(&best[0], weights)
    }
}
