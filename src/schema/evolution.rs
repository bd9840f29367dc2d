//! Candidate, progress and result types for a guessing game run.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A fixed-length guess; one chromosome of the population.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(String);

impl Candidate {
    /// The guess as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the guess.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl FromIterator<char> for Candidate {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl PartialEq<&str> for Candidate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pass through so width/alignment flags work in tables.
        f.pad(&self.0)
    }
}

/// A candidate paired with the distance the oracle reported for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Oracle distance; 0 means the secret was guessed.
    pub distance: usize,
}

/// Best distance observed in one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// 1-based generation index.
    pub generation: usize,
    pub best_distance: usize,
}

/// Cost trajectory of a run, for display and plotting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionHistory {
    pub points: Vec<HistoryPoint>,
}

impl EvolutionHistory {
    /// Append the result of one generation.
    pub fn record(&mut self, generation: usize, best_distance: usize) {
        self.points.push(HistoryPoint {
            generation,
            best_distance,
        });
    }

    /// `(generation_index, best_distance)` pairs in run order.
    pub fn cost_trajectory(&self) -> Vec<(usize, usize)> {
        self.points
            .iter()
            .map(|p| (p.generation, p.best_distance))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Write the history as pretty JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    /// Read a history previously written by [`EvolutionHistory::save_json`].
    pub fn load_json<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Progress reported to the caller after every generation.
#[derive(Debug, Clone)]
pub struct GenerationProgress<'a> {
    /// 1-based generation index.
    pub generation: usize,
    pub max_generations: usize,
    /// Best candidate of this generation's evaluation.
    pub best: &'a ScoredCandidate,
    /// Whether the oracle accepted `best` as the secret.
    pub solved: bool,
}

/// Reason a game stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// The secret word was reproduced.
    Solved,
    /// Reached maximum generations.
    MaxGenerations,
}

/// Final result of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    /// Best candidate of the last generation played.
    pub best: ScoredCandidate,
    /// Total generations run.
    pub generations: usize,
    pub stop_reason: StopReason,
    pub history: EvolutionHistory,
}

impl GameResult {
    pub fn is_solved(&self) -> bool {
        self.stop_reason == StopReason::Solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_candidate_display_pads() {
        let candidate = Candidate::from("cat");
        assert_eq!(format!("{:5}|", candidate), "cat  |");
        assert_eq!(candidate.len(), 3);
        assert_eq!(candidate, "cat");
    }

    #[test]
    fn test_candidate_serializes_as_string() {
        let json = serde_json::to_string(&Candidate::from("dog")).unwrap();
        assert_eq!(json, "\"dog\"");
    }

    #[test]
    fn test_cost_trajectory() {
        let mut history = EvolutionHistory::default();
        history.record(1, 3);
        history.record(2, 2);
        history.record(3, 0);

        assert_eq!(history.cost_trajectory(), vec![(1, 3), (2, 2), (3, 0)]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_history_json_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = EvolutionHistory::default();
        history.record(1, 4);
        history.record(2, 1);
        history.save_json(&path).unwrap();

        let loaded = EvolutionHistory::load_json(&path).unwrap();
        assert_eq!(loaded, history);
    }

    #[test]
    fn test_history_load_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json").unwrap();

        let err = EvolutionHistory::load_json(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
