//! Elite selection and mating-pool construction.
//!
//! Each generation is split into two groups after ranking:
//!
//! - **Elites**: the top `floor(population_size * elite_ratio)` routes.
//!   They are the breeding stock for the next generation.
//! - **Mating pool**: every remaining route, weighted in proportion to
//!   its fitness relative to the generation's best route. Drawing from the
//!   pool is fitness-proportionate (roulette-wheel) selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (reproduction by roulette wheel)

use crate::fitness::{normalized_fitness, FitnessCache};
use rand::Rng;

/// Number of elites: `floor(population_size * elite_ratio)`.
///
/// Zero is a valid result, e.g. for `population_size < 10` at the default
/// ratio of 0.1.
pub fn elite_count(population_size: usize, elite_ratio: f64) -> usize {
    let count = (population_size as f64 * elite_ratio).floor() as usize;
    count.min(population_size)
}

/// Number of pool copies for a route with the given normalized fitness:
/// `ceil(normalized * population_size)`.
pub fn pool_copies(normalized: f64, population_size: usize) -> usize {
    (normalized * population_size as f64).ceil() as usize
}

/// Route indices weighted by relative fitness.
///
/// Each candidate carries `ceil(normalized * population_size)` copies, but
/// the copies are stored as a running total rather than materialized, so a
/// draw costs O(log n) and the pool holds one entry per candidate.
#[derive(Debug, Clone, Default)]
pub struct MatingPool {
    routes: Vec<usize>,
    cumulative: Vec<usize>,
}

impl MatingPool {
    /// Builds the pool from the non-elite `candidates`.
    ///
    /// `best_length` is the length of the fittest route of the generation,
    /// elite or not. Candidates with zero copies are left out.
    ///
    /// # Complexity
    /// O(candidates)
    pub fn build(
        candidates: &[usize],
        cache: &FitnessCache,
        best_length: f64,
        population_size: usize,
    ) -> Self {
        let mut routes = Vec::with_capacity(candidates.len());
        let mut cumulative = Vec::with_capacity(candidates.len());
        let mut total = 0usize;
        for &idx in candidates {
            let normalized = normalized_fitness(cache.get(idx).length, best_length);
            let copies = pool_copies(normalized, population_size);
            if copies == 0 {
                continue;
            }
            total += copies;
            routes.push(idx);
            cumulative.push(total);
        }
        Self { routes, cumulative }
    }

    /// Total number of copies across all routes.
    pub fn len(&self) -> usize {
        self.cumulative.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Draws a route index with probability proportional to its copy count.
    ///
    /// Returns `None` when the pool is empty.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.routes.is_empty() {
            return None;
        }
        let ticket = rng.random_range(0..self.len());
        let slot = self.cumulative.partition_point(|&upper| upper <= ticket);
        Some(self.routes[slot])
    }

    /// Number of copies held for route `idx`.
    #[cfg(test)]
    fn count_of(&self, idx: usize) -> usize {
        self.routes
            .iter()
            .position(|&r| r == idx)
            .map(|slot| {
                let lower = if slot == 0 { 0 } else { self.cumulative[slot - 1] };
                self.cumulative[slot] - lower
            })
            .unwrap_or(0)
    }
}
