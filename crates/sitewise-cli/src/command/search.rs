use std::{collections::BTreeMap, path::PathBuf};

use anyhow::bail;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use sitewise_model::{CriteriaConfig, RawCriteriaConfig, WeightVector};
use sitewise_search::{Search, SearchParams, StopReason};

use crate::{sample, schema::SearchReport, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SearchArg {
    /// Criteria configuration JSON file (built-in solar-site sample when
    /// omitted)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Custom weights JSON file (map of criterion id to weight); disables
    /// weight sampling
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Maximum number of generations
    #[arg(long, default_value_t = SearchParams::default().generations)]
    generations: usize,
    /// Population size
    #[arg(long, default_value_t = SearchParams::default().population_size)]
    population_size: usize,
    /// Fraction of the population carried over as elites
    #[arg(long, default_value_t = SearchParams::default().elite_rate)]
    elite_rate: f32,
    /// Probability of mutating an offspring
    #[arg(long, default_value_t = SearchParams::default().mutation_rate)]
    mutation_rate: f32,
    /// Best-fitness change below which a generation counts as stagnant
    #[arg(long, default_value_t = SearchParams::default().early_stop_threshold)]
    early_stop_threshold: f32,
    /// Stagnant generations tolerated before early stopping
    #[arg(long, default_value_t = SearchParams::default().patience)]
    patience: usize,
    /// RNG seed for a reproducible run (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Report output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Suppress per-generation progress output
    #[arg(long)]
    quiet: bool,
}

impl Default for SearchArg {
    fn default() -> Self {
        let params = SearchParams::default();
        Self {
            config: None,
            weights: None,
            generations: params.generations,
            population_size: params.population_size,
            elite_rate: params.elite_rate,
            mutation_rate: params.mutation_rate,
            early_stop_threshold: params.early_stop_threshold,
            patience: params.patience,
            seed: None,
            output: None,
            quiet: false,
        }
    }
}

pub(crate) fn run(arg: &SearchArg) -> anyhow::Result<()> {
    let raw: RawCriteriaConfig = match &arg.config {
        Some(path) => util::read_json_file("criteria config", path)?,
        None => sample::solar_site(),
    };
    let config = raw.build()?;

    let custom_weights = arg
        .weights
        .as_ref()
        .map(|path| -> anyhow::Result<WeightVector> {
            let map: BTreeMap<String, f32> = util::read_json_file("weights", path)?;
            weight_vector_from_map(&config, &map)
        })
        .transpose()?;

    let params = SearchParams {
        generations: arg.generations,
        population_size: arg.population_size,
        elite_rate: arg.elite_rate,
        mutation_rate: arg.mutation_rate,
        early_stop_threshold: arg.early_stop_threshold,
        patience: arg.patience,
    };
    let search = Search::new(config, params)?;

    let mut rng = match arg.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_os_rng(),
    };

    let quiet = arg.quiet;
    let outcome = search.run_with_progress(&mut rng, custom_weights, |summary| {
        if !quiet {
            eprintln!(
                "Generation #{}: best {:.3} (mean {:.3}, std {:.3}, range {:.3}..{:.3})",
                summary.generation,
                summary.best_fitness,
                summary.fitness.mean,
                summary.fitness.std_dev,
                summary.fitness.min,
                summary.fitness.max,
            );
        }
    });

    if let StopReason::Converged { generation } = outcome.stop {
        eprintln!("Early stopping triggered at generation {generation}");
    }
    eprintln!("Best location: #{}", outcome.best.id());
    for (criterion, &value) in search.config().criteria().iter().zip(outcome.best.values()) {
        eprintln!("  {}: {value:.3}", criterion.label());
    }
    eprintln!("Weights:");
    for (criterion, &weight) in search.config().criteria().iter().zip(outcome.weights.values()) {
        eprintln!("  {}: {weight:.3}", criterion.id());
    }
    eprintln!("Fitness: {:.3}", outcome.best_fitness);

    let report = SearchReport::new(search.config(), &outcome);
    util::save_json(&report, arg.output.as_deref())?;

    Ok(())
}

/// Orders an id-keyed weight map into a [`WeightVector`].
///
/// Every configured criterion must be covered and no unknown ids may
/// appear.
fn weight_vector_from_map(
    config: &CriteriaConfig,
    map: &BTreeMap<String, f32>,
) -> anyhow::Result<WeightVector> {
    for id in map.keys() {
        if config.position(id).is_none() {
            bail!("weight entry '{id}' does not name a configured criterion");
        }
    }
    let values = config
        .criteria()
        .iter()
        .map(|criterion| {
            map.get(criterion.id())
                .copied()
                .ok_or_else(|| anyhow::anyhow!("no weight given for criterion '{}'", criterion.id()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(WeightVector::new(values))
}
