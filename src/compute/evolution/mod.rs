//! Evolutionary search for the oracle's secret word.
//!
//! # Overview
//!
//! The search system consists of:
//!
//! - **Genome Operations** (`genome`): Random generation, crossover, and mutation
//! - **Selection** (`selection`): Roulette-wheel parent selection
//! - **Search Engine** (`search`): Generation step with elitism
//! - **Game Loop** (`game`): Runs generations until the word is guessed
//!
//! # Example
//!
//! ```rust,no_run
//! use henyo::compute::WordOracle;
//! use henyo::compute::evolution::Game;
//! use henyo::schema::GameConfig;
//!
//! let config = GameConfig::default();
//! let mut game = Game::from_config(WordOracle::new("genetic"), &config).unwrap();
//!
//! let result = game
//!     .run_with_callback(|progress| {
//!         println!(
//!             "Generation {}: {} (cost {})",
//!             progress.generation, progress.best.candidate, progress.best.distance
//!         );
//!     })
//!     .unwrap();
//!
//! println!("Solved: {}", result.is_solved());
//! ```
//!
//! # Crossover Strategies
//!
//! - `SinglePoint` (default): splice at one cut point
//! - `Order`: keep a random segment, fill the rest from the other parent

mod game;
mod genome;
mod search;
mod selection;

pub use game::Game;
pub use genome::{ALPHABET, CandidateRng};
pub use search::{EngineError, EvolutionEngine};
pub use selection::{RouletteWheel, fitness_from_distances};
