//! Genetic algorithm engine that evolves guesses toward the secret word.

use log::{debug, info};

use crate::compute::Oracle;
use crate::schema::{
    Candidate, ConfigError, GameConfig, GeneticAlgorithmConfig, ScoredCandidate,
};

use super::genome::CandidateRng;
use super::selection::RouletteWheel;

/// Engine state and precondition errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("Population has not been initialized")]
    Uninitialized,
    #[error("Cannot pick a best candidate from an empty population")]
    EmptyPopulation,
    #[error("Word length must be at least 1")]
    InvalidWordLength,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Evolution engine holding the population of guesses.
///
/// The engine starts uninitialized; [`EvolutionEngine::initialize_population`]
/// must be called before [`EvolutionEngine::evaluate`] or
/// [`EvolutionEngine::evolve`].
pub struct EvolutionEngine {
    word_length: usize,
    population_size: usize,
    config: GeneticAlgorithmConfig,
    rng: CandidateRng,
    population: Vec<Candidate>,
    generation: usize,
}

impl EvolutionEngine {
    /// Create a new evolution engine with an explicit random source.
    pub fn new(
        word_length: usize,
        population_size: usize,
        config: GeneticAlgorithmConfig,
        rng: CandidateRng,
    ) -> Result<Self, EngineError> {
        if word_length == 0 {
            return Err(EngineError::InvalidWordLength);
        }
        if population_size == 0 {
            return Err(ConfigError::PopulationEmpty.into());
        }
        config.validate()?;

        Ok(Self {
            word_length,
            population_size,
            config,
            rng,
            population: Vec::new(),
            generation: 0,
        })
    }

    /// Create an engine from a game configuration.
    ///
    /// Seeds the random source from `random_seed`, or from a freshly drawn
    /// seed when unset. The seed is logged so any run can be replayed.
    pub fn from_config(word_length: usize, config: &GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let seed = config.random_seed.unwrap_or_else(rand::random);
        info!("Random seed: {}", seed);
        Self::new(
            word_length,
            config.population.size,
            config.genetic.clone(),
            CandidateRng::new(seed),
        )
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Seed of the engine's random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of generations evolved since initialization.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    pub fn is_initialized(&self) -> bool {
        !self.population.is_empty()
    }

    /// Replace the population with random candidates and reset the
    /// generation counter.
    pub fn initialize_population(&mut self) {
        info!(
            "Initializing population of {} candidates of length {}",
            self.population_size, self.word_length
        );
        self.population = (0..self.population_size)
            .map(|_| self.rng.random_candidate(self.word_length))
            .collect();
        self.generation = 0;
    }

    /// Score every candidate, preserving population order.
    pub fn evaluate<O: Oracle + ?Sized>(
        &self,
        oracle: &O,
    ) -> Result<Vec<ScoredCandidate>, EngineError> {
        if !self.is_initialized() {
            return Err(EngineError::Uninitialized);
        }

        Ok(self
            .population
            .iter()
            .map(|candidate| ScoredCandidate {
                candidate: candidate.clone(),
                distance: oracle.distance(candidate.as_str()),
            })
            .collect())
    }

    /// Candidate with the lowest distance; the first one wins ties.
    pub fn best(scored: &[ScoredCandidate]) -> Result<&ScoredCandidate, EngineError> {
        scored
            .iter()
            .min_by_key(|s| s.distance)
            .ok_or(EngineError::EmptyPopulation)
    }

    /// Run a single generation step.
    ///
    /// Returns the best candidate of the evaluation made at the start of the
    /// step, i.e. before the population is replaced. That candidate is
    /// carried into the new population unchanged.
    pub fn evolve<O: Oracle + ?Sized>(
        &mut self,
        oracle: &O,
    ) -> Result<ScoredCandidate, EngineError> {
        if !self.is_initialized() {
            return Err(EngineError::Uninitialized);
        }
        self.generation += 1;

        let scored = self.evaluate(oracle)?;
        let best = Self::best(&scored)?.clone();

        let mut next_gen = Vec::with_capacity(self.population_size + 1);

        // Elitism: keep the best candidate
        next_gen.push(best.candidate.clone());

        // Fill rest with offspring
        let wheel = RouletteWheel::new(&scored);
        while next_gen.len() < self.population_size {
            let parent1 = wheel
                .spin(&mut self.rng)
                .ok_or(EngineError::EmptyPopulation)?;
            let parent2 = wheel
                .spin(&mut self.rng)
                .ok_or(EngineError::EmptyPopulation)?;

            let (child1, child2) = if self.rng.chance(self.config.crossover_rate) {
                self.rng.crossover(self.config.crossover, parent1, parent2)
            } else {
                (parent1.clone(), parent2.clone())
            };

            next_gen.push(self.rng.mutate(&child1, self.config.mutation_rate));
            next_gen.push(self.rng.mutate(&child2, self.config.mutation_rate));
        }

        // Offspring come in pairs; an odd size overshoots by one.
        next_gen.truncate(self.population_size);
        self.population = next_gen;

        debug!(
            "Gen {}: best={} distance={} total_fitness={}",
            self.generation,
            best.candidate,
            best.distance,
            wheel.total_fitness()
        );

        Ok(best)
    }
}
