//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds every parameter of a run and is passed
//! explicitly to [`EvolutionRunner`](super::EvolutionRunner).

use super::selection::elite_count;
use crate::error::{Error, Result};

/// Configuration for the evolutionary loop.
///
/// # Defaults
///
/// ```
/// use u_tsp::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(200)
///     .with_generations(300)
///     .with_elite_ratio(0.2)
///     .with_seed(42);
/// assert_eq!(config.elite_count(), 40);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionConfig {
    /// Number of routes in every generation.
    pub population_size: usize,

    /// Number of generations to evolve. Zero returns the fittest route of
    /// the initial random population.
    pub generations: usize,

    /// Fraction of each generation kept as breeding stock (0.0–1.0).
    ///
    /// The elite count is `floor(population_size * elite_ratio)`. Elites
    /// parent the next generation but are not copied into it.
    pub elite_ratio: f64,

    /// Whether to evaluate routes in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results do not depend
    /// on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed, which is logged and reported in the result.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 1000,
            elite_ratio: 0.1,
            parallel: true,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites per generation.
    pub fn elite_count(&self) -> usize {
        elite_count(self.population_size, self.elite_ratio)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::ZeroPopulation);
        }
        if !(0.0..=1.0).contains(&self.elite_ratio) {
            return Err(Error::InvalidEliteRatio(self.elite_ratio));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 1000);
        assert!((config.elite_ratio - 0.1).abs() < 1e-10);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(20)
            .with_generations(0)
            .with_elite_ratio(0.25)
            .with_parallel(false)
            .with_seed(7);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 0);
        assert!((config.elite_ratio - 0.25).abs() < 1e-10);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_elite_ratio() {
        let config = EvolutionConfig::default().with_elite_ratio(1.5);
        assert!((config.elite_ratio - 1.0).abs() < 1e-10);
        let config = EvolutionConfig::default().with_elite_ratio(-0.5);
        assert!(config.elite_ratio.abs() < 1e-10);
    }

    #[test]
    fn test_elite_count() {
        let config = EvolutionConfig::default();
        assert_eq!(config.clone().with_population_size(10).elite_count(), 1);
        assert_eq!(config.clone().with_population_size(3).elite_count(), 0);
        assert_eq!(config.with_population_size(50).elite_count(), 5);
    }

    #[test]
    fn test_validate_zero_population() {
        let config = EvolutionConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(Error::ZeroPopulation));
    }

    #[test]
    fn test_validate_elite_ratio_out_of_range() {
        let config = EvolutionConfig {
            elite_ratio: 2.0,
            ..EvolutionConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidEliteRatio(2.0)));

        let config = EvolutionConfig {
            elite_ratio: f64::NAN,
            ..EvolutionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_population_of_one_is_valid() {
        let config = EvolutionConfig::default().with_population_size(1);
        assert!(config.validate().is_ok());
        assert_eq!(config.elite_count(), 0);
    }
}
