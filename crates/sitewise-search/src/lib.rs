//! Genetic search for the best-scoring location.
//!
//! This crate is the optimizer core: a population-based stochastic search
//! over candidate locations, driven by the polarity-adjusted weighted-sum
//! fitness from `sitewise-evaluator`.
//!
//! # Algorithm
//!
//! Each generation:
//!
//! 1. **Selection** - the population is stable-sorted by fitness and the top
//!    `elite_count` individuals are kept (elitist truncation).
//! 2. **Elitism** - the next generation is seeded with the elites,
//!    unmodified.
//! 3. **Reproduction** - until the population is back to full size, two
//!    parents are drawn uniformly from the elite set, blended by arithmetic
//!    mean ([`operators::crossover`]), and perturbed all-or-nothing with the
//!    configured mutation rate ([`operators::mutate`]).
//! 4. **Early stopping** - when the best fitness changes by less than the
//!    threshold for `patience` consecutive generations, the search converges
//!    and stops.
//!
//! The search ends [`StopReason::Converged`] (early stop fired) or
//! [`StopReason::Exhausted`] (all generations ran) and returns the best
//! location of the final population together with the weight vector it was
//! scored under.
//!
//! This is heuristic local search with a single scalar objective: no Pareto
//! fronts, no constraints, no global-optimum guarantee.
//!
//! # Randomness
//!
//! Everything stochastic goes through the caller's `rand::Rng`, so a seeded
//! generator (e.g. `rand_pcg::Pcg32`) makes whole runs reproducible. Each
//! run owns its population exclusively; concurrent searches just need
//! independent RNGs and configurations.

pub use self::{
    params::{ParamError, SearchParams},
    search::{GenerationSummary, Search, SearchOutcome, StopReason},
};

pub mod operators;
pub mod params;
pub mod search;
