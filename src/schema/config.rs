//! Configuration types for a guessing game run.

use serde::{Deserialize, Serialize};

/// Top-level configuration for a game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Population and generation settings.
    #[serde(default)]
    pub population: PopulationConfig,
    /// Genetic operator settings.
    #[serde(default)]
    pub genetic: GeneticAlgorithmConfig,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

/// Population and generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Number of candidates in every generation.
    #[serde(default = "default_population_size")]
    pub size: usize,
    /// Maximum number of generations before giving up.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: default_population_size(),
            max_generations: default_max_generations(),
        }
    }
}

fn default_population_size() -> usize {
    100
}
fn default_max_generations() -> usize {
    100
}

/// Genetic Algorithm configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneticAlgorithmConfig {
    /// Crossover probability per breeding event (0.0-1.0).
    #[serde(default = "default_crossover_rate")]
    pub crossover_rate: f64,
    /// Mutation probability per character (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    /// Recombination strategy.
    #[serde(default)]
    pub crossover: CrossoverMethod,
}

impl Default for GeneticAlgorithmConfig {
    fn default() -> Self {
        Self {
            crossover_rate: default_crossover_rate(),
            mutation_rate: default_mutation_rate(),
            crossover: CrossoverMethod::default(),
        }
    }
}

fn default_crossover_rate() -> f64 {
    0.8
}
fn default_mutation_rate() -> f64 {
    0.1
}

/// Recombination strategy for two parent candidates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "type")]
pub enum CrossoverMethod {
    /// Splice both parents at one random cut point in `[1, L-1]`.
    #[default]
    SinglePoint,
    /// Keep a random `[lo, hi]` segment from one parent and fill the rest
    /// by walking the other parent from just past `hi`, wrapping around.
    Order,
}

impl GameConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population.size == 0 {
            return Err(ConfigError::PopulationEmpty);
        }
        if self.population.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        self.genetic.validate()
    }
}

impl GeneticAlgorithmConfig {
    /// Validate operator rates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check_rate = |value: f64, name: &'static str| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::InvalidRate { name, value })
            }
        };

        check_rate(self.crossover_rate, "crossover_rate")?;
        check_rate(self.mutation_rate, "mutation_rate")?;
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Population size must be at least 1")]
    PopulationEmpty,
    #[error("Maximum generations must be at least 1")]
    NoGenerations,
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },
}
