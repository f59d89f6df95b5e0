//! Genetic-algorithm engine for the open-path TSP.
//!
//! Each generation runs the same fixed pipeline:
//!
//! 1. **Rank** routes by cached fitness
//! 2. **Elite selection**: the top `floor(population_size * elite_ratio)`
//!    routes become breeding stock
//! 3. **Mating pool**: remaining routes weighted by relative fitness, used
//!    for parents when there are no elites
//! 4. **Breeding**: ordered crossover of randomly drawn parents
//! 5. **Replacement**: the children form the next generation in full
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: run parameters
//! - [`EvolutionRunner`]: executes the loop
//! - [`EvolutionResult`]: fittest route of the final generation
//!
//! # Submodules
//!
//! - [`operators`]: ordered crossover on index permutations
//! - [`selection`]: elite count and mating pool
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;

pub use config::EvolutionConfig;
pub use runner::{EvolutionResult, EvolutionRunner};
pub use selection::{elite_count, MatingPool};
