//! Genetic-algorithm heuristic for the Traveling Salesman Problem.
//!
//! Routes are open paths over 2-D points: the length of a route is the sum
//! of its consecutive legs, without a return leg to the start. Fitness is
//! the inverse of that length.
//!
//! - **Points and routes**: [`Point`], [`Route`]
//! - **Fitness**: [`fitness`] — path length, inverse-length score, and a
//!   per-generation cache
//! - **Population**: [`Population`] — random initialization and fittest query
//! - **Evolution**: [`evolution`] — elitism, fitness-proportionate mating
//!   pool, ordered crossover, generational replacement
//!
//! The solver is a stochastic heuristic, not an exact method. All
//! randomness flows from one seedable generator ([`random`]), so runs are
//! reproducible.
//!
//! # Example
//!
//! ```
//! use u_tsp::{solve, Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ];
//! let result = solve(&points, 20, 50).unwrap();
//! println!("Fittest Route: {result}");
//! ```

mod error;
pub mod evolution;
pub mod fitness;
mod point;
mod population;
pub mod random;
mod route;

pub use error::{Error, Result};
pub use evolution::{EvolutionConfig, EvolutionResult, EvolutionRunner};
pub use point::Point;
pub use population::Population;
pub use route::{Route, RouteDisplay};

/// Runs the solver with default settings and a random seed.
///
/// Shorthand for [`EvolutionRunner::run`] with
/// [`EvolutionConfig::default`] adjusted to the given sizes.
pub fn solve(points: &[Point], population_size: usize, generations: usize) -> Result<EvolutionResult> {
    let config = EvolutionConfig::default()
        .with_population_size(population_size)
        .with_generations(generations);
    EvolutionRunner::run(points, &config)
}
