//! Driving loop that plays one guessing game to completion.

use log::{debug, info, warn};

use crate::compute::{Oracle, WordOracle};
use crate::schema::{
    ConfigError, EvolutionHistory, GameConfig, GameResult, GenerationProgress, StopReason,
};

use super::search::{EngineError, EvolutionEngine};

/// A guessing game: an oracle, the engine searching for its secret and a
/// generation budget.
pub struct Game<O: Oracle> {
    oracle: O,
    engine: EvolutionEngine,
    max_generations: usize,
}

impl Game<WordOracle> {
    /// Build a game for `oracle`'s secret from a configuration.
    pub fn from_config(oracle: WordOracle, config: &GameConfig) -> Result<Self, EngineError> {
        let engine = EvolutionEngine::from_config(oracle.word_length(), config)?;
        Self::new(oracle, engine, config.population.max_generations)
    }
}

impl<O: Oracle> Game<O> {
    pub fn new(
        oracle: O,
        engine: EvolutionEngine,
        max_generations: usize,
    ) -> Result<Self, EngineError> {
        if max_generations == 0 {
            return Err(ConfigError::NoGenerations.into());
        }
        Ok(Self {
            oracle,
            engine,
            max_generations,
        })
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn engine(&self) -> &EvolutionEngine {
        &self.engine
    }

    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Play with a progress callback invoked after every generation.
    ///
    /// The population is re-initialized first, so a game can be replayed.
    /// Running out of generations is reported through
    /// [`StopReason::MaxGenerations`], not as an error.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<GameResult, EngineError>
    where
        F: FnMut(&GenerationProgress<'_>),
    {
        info!(
            "Starting game: word length {}, population {}, up to {} generations",
            self.engine.word_length(),
            self.engine.population_size(),
            self.max_generations
        );

        self.engine.initialize_population();
        let mut history = EvolutionHistory::default();
        let mut last = None;
        let mut stop_reason = StopReason::MaxGenerations;

        for generation in 1..=self.max_generations {
            let best = self.engine.evolve(&self.oracle)?;
            let solved = self.oracle.is_match(best.candidate.as_str());
            history.record(generation, best.distance);

            callback(&GenerationProgress {
                generation,
                max_generations: self.max_generations,
                best: &best,
                solved,
            });

            last = Some(best);
            if solved {
                stop_reason = StopReason::Solved;
                break;
            }
        }

        let best = last.ok_or(EngineError::EmptyPopulation)?;
        let generations = history.len();
        match stop_reason {
            StopReason::Solved => info!(
                "Solved in generation {}: {}",
                generations, best.candidate
            ),
            StopReason::MaxGenerations => warn!(
                "Maximum generations ({}) reached; best guess {} (distance {})",
                self.max_generations, best.candidate, best.distance
            ),
        }
        debug!("Cost trajectory: {:?}", history.cost_trajectory());

        Ok(GameResult {
            best,
            generations,
            stop_reason,
            history,
        })
    }

    /// Play to completion (blocking).
    pub fn run(&mut self) -> Result<GameResult, EngineError> {
        self.run_with_callback(|_| {})
    }
}
