//! Evolutionary loop execution.
//!
//! [`EvolutionRunner`] orchestrates the complete process:
//! initialization → rank → elite selection → mating pool → breeding →
//! replacement → repeat.

use super::config::EvolutionConfig;
use super::operators::ordered_crossover;
use super::selection::MatingPool;
use crate::error::{Error, Result};
use crate::fitness::FitnessCache;
use crate::point::Point;
use crate::population::Population;
use crate::random::{create_rng, random_seed};
use crate::route::Route;
use rand::Rng;
use std::fmt;
use tracing::{debug, info, instrument};

/// Result of an evolution run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult {
    /// The fittest route of the final generation.
    pub best: Route,

    /// The points of `best`, in visiting order.
    pub best_points: Vec<Point>,

    /// Open-path length of `best`.
    pub best_length: f64,

    /// Fitness of `best` (`1 / best_length`, or infinity for length 0).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Seed the run was started from; `None` for a caller-supplied generator.
    pub seed: Option<u64>,

    /// Best length of the initial population, then of each generation.
    ///
    /// Has `generations + 1` entries. Not monotonic: elites breed the next
    /// generation but are not carried into it.
    pub length_history: Vec<f64>,
}

impl fmt::Display for EvolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.best_points.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{point}")?;
        }
        Ok(())
    }
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tsp::{EvolutionConfig, EvolutionRunner, Point};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let config = EvolutionConfig::default()
///     .with_population_size(20)
///     .with_generations(50)
///     .with_seed(42);
///
/// let result = EvolutionRunner::run(&points, &config).unwrap();
/// assert!(result.best.is_permutation_of(points.len()));
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the solver with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// Fails before any computation if the configuration is invalid, the
    /// point list is empty, a point has a non-finite coordinate, or the
    /// coordinates are spread so far apart that a route length overflows.
    #[instrument(
        level = "info",
        skip(points, config),
        fields(cities = points.len(), population_size = config.population_size, generations = config.generations)
    )]
    pub fn run(points: &[Point], config: &EvolutionConfig) -> Result<EvolutionResult> {
        validate(points, config)?;

        let seed = config.seed.unwrap_or_else(random_seed);
        info!(seed, "starting evolution");

        let mut rng = create_rng(seed);
        let mut result = evolve(points, config, &mut rng);
        result.seed = Some(seed);
        Ok(result)
    }

    /// Runs the solver with a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng + ?Sized>(
        points: &[Point],
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Result<EvolutionResult> {
        validate(points, config)?;
        Ok(evolve(points, config, rng))
    }
}

fn validate(points: &[Point], config: &EvolutionConfig) -> Result<()> {
    config.validate()?;
    if points.is_empty() {
        return Err(Error::EmptyPoints);
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(Error::NonFiniteCoordinate { index });
    }
    if !max_path_length(points).is_finite() {
        return Err(Error::CoordinateRangeTooLarge);
    }
    Ok(())
}

/// Upper bound on any open-path length: `n - 1` legs, each no longer than
/// the bounding-box diagonal.
fn max_path_length(points: &[Point]) -> f64 {
    let (min_x, max_x, min_y, max_y) = points.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(min_x, max_x, min_y, max_y), p| {
            (min_x.min(p.x()), max_x.max(p.x()), min_y.min(p.y()), max_y.max(p.y()))
        },
    );
    let diagonal = (max_x - min_x).hypot(max_y - min_y);
    diagonal * points.len().saturating_sub(1) as f64
}

/// The generational loop. Inputs are validated.
fn evolve<R: Rng + ?Sized>(
    points: &[Point],
    config: &EvolutionConfig,
    rng: &mut R,
) -> EvolutionResult {
    // 1. Initialize population
    let mut population = Population::random(points, config.population_size, rng);
    let mut cache = population.evaluate(config.parallel);

    let mut length_history = Vec::with_capacity(config.generations + 1);
    length_history.push(best_length(&cache));

    // 2. Evolutionary loop
    for generation in 1..=config.generations {
        population = next_generation(&population, &cache, config, rng);
        cache = population.evaluate(config.parallel);

        let best = best_length(&cache);
        length_history.push(best);
        debug!(generation, best_length = best, "generation complete");
    }

    // 3. Fittest of the final generation; no best-ever tracking
    let idx = cache.fittest_index().unwrap_or(0);
    let best = population.routes()[idx].clone();
    let eval = cache.get(idx);

    info!(
        generations = config.generations,
        best_length = eval.length,
        "evolution finished"
    );

    EvolutionResult {
        best_points: best.resolve(points),
        best,
        best_length: eval.length,
        best_fitness: eval.fitness,
        generations: config.generations,
        seed: None,
        length_history,
    }
}

/// Breeds the next generation from the current one.
///
/// Exactly `population_size` children are bred by ordered crossover. Both
/// parents are drawn uniformly, with replacement, from the elites; with no
/// elites they are drawn from the mating pool instead. Elites are not
/// copied into the next generation.
fn next_generation<'a, R: Rng + ?Sized>(
    population: &Population<'a>,
    cache: &FitnessCache,
    config: &EvolutionConfig,
    rng: &mut R,
) -> Population<'a> {
    let routes = population.routes();

    // Rank: descending fitness over cached values
    let ranking = cache.ranking();
    let best_length = cache.get(ranking[0]).length;

    // Elite selection
    let elite_count = config.elite_count().min(ranking.len());
    let (elites, rest) = ranking.split_at(elite_count);

    // Mating pool, only needed when there is no breeding stock
    let parents = if elites.is_empty() {
        let pool = MatingPool::build(rest, cache, best_length, config.population_size);
        debug!(mating_pool = pool.len(), best_length, "breeding from mating pool");
        Parents::Pool {
            pool,
            fallback: ranking[0],
        }
    } else {
        debug!(elites = elites.len(), best_length, "breeding from elites");
        Parents::Elites(elites)
    };

    // Breeding
    let n = population.points().len();
    let children: Vec<Route> = (0..config.population_size)
        .map(|_| {
            let p1 = &routes[parents.pick(rng)];
            let p2 = &routes[parents.pick(rng)];
            let child = Route::new(ordered_crossover(p1.order(), p2.order(), rng));
            debug_assert!(child.is_permutation_of(n), "crossover broke permutation");
            child
        })
        .collect();

    // Replacement
    Population::from_routes(population.points(), children)
}

/// Where parents come from in one generation.
enum Parents<'r> {
    /// Uniform draw, with replacement.
    Elites(&'r [usize]),
    /// Fitness-proportionate draw; `fallback` is the top-ranked route.
    Pool { pool: MatingPool, fallback: usize },
}

impl Parents<'_> {
    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self {
            Parents::Elites(elites) => elites[rng.random_range(0..elites.len())],
            Parents::Pool { pool, fallback } => pool.draw(rng).unwrap_or(*fallback),
        }
    }
}

fn best_length(cache: &FitnessCache) -> f64 {
    cache
        .iter()
        .map(|eval| eval.length)
        .fold(f64::INFINITY, f64::min)
}

// ============================================================================
// Tests
// ============================================================================
