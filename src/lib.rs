//! Henyo - A word guessing game solved by a genetic algorithm.
//!
//! An oracle holds a secret word and scores guesses by Hamming distance;
//! an evolution engine breeds a population of guesses generation by
//! generation until it reproduces the secret or runs out of generations.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, candidate and result types
//! - `compute`: Oracle scoring and the genetic algorithm
//!
//! # Example
//!
//! ```rust,no_run
//! use henyo::{
//!     compute::{Oracle, WordOracle},
//!     compute::evolution::{CandidateRng, EvolutionEngine},
//!     schema::GeneticAlgorithmConfig,
//! };
//!
//! let oracle = WordOracle::new("cat");
//! let mut engine = EvolutionEngine::new(
//!     oracle.word_length(),
//!     100,
//!     GeneticAlgorithmConfig::default(),
//!     CandidateRng::new(42),
//! )
//! .unwrap();
//! engine.initialize_population();
//!
//! for _ in 0..100 {
//!     let best = engine.evolve(&oracle).unwrap();
//!     if oracle.is_match(best.candidate.as_str()) {
//!         println!("Guessed {} in generation {}", best.candidate, engine.generation());
//!         break;
//!     }
//! }
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::evolution::{EvolutionEngine, Game};
pub use compute::{Oracle, WordOracle};
pub use schema::{GameConfig, GameResult};
