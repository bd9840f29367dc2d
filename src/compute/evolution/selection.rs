//! Fitness-proportionate parent selection.

use crate::schema::{Candidate, ScoredCandidate};

use super::genome::CandidateRng;

/// Convert oracle distances into positive fitness values.
///
/// `f = d_max - d + 1`, so the worst candidate of the generation gets 1.
pub fn fitness_from_distances(distances: &[usize]) -> Vec<u64> {
    let max_distance = distances.iter().copied().max().unwrap_or(0);
    distances
        .iter()
        .map(|&d| (max_distance - d + 1) as u64)
        .collect()
}

/// Roulette wheel built from one generation's evaluation.
pub struct RouletteWheel<'a> {
    scored: &'a [ScoredCandidate],
    fitness: Vec<u64>,
    total: u64,
}

impl<'a> RouletteWheel<'a> {
    pub fn new(scored: &'a [ScoredCandidate]) -> Self {
        let distances: Vec<usize> = scored.iter().map(|s| s.distance).collect();
        let fitness = fitness_from_distances(&distances);
        let total = fitness.iter().sum();
        Self {
            scored,
            fitness,
            total,
        }
    }

    /// Fitness per candidate, in population order.
    pub fn fitness(&self) -> &[u64] {
        &self.fitness
    }

    pub fn total_fitness(&self) -> u64 {
        self.total
    }

    /// Spin the wheel once. Returns `None` only for an empty population.
    pub fn spin(&self, rng: &mut CandidateRng) -> Option<&'a Candidate> {
        let population: &'a [ScoredCandidate] = self.scored;
        if population.is_empty() {
            return None;
        }
        if self.total == 0 {
            let idx = rng.index(population.len());
            return Some(&population[idx].candidate);
        }

        let target = rng.uniform(self.total as f64);
        let mut cumulative = 0.0;
        for (scored, &fitness) in population.iter().zip(&self.fitness) {
            cumulative += fitness as f64;
            if cumulative >= target {
                return Some(&scored.candidate);
            }
        }

        // Accumulation fell short of the draw.
        population.last().map(|s| &s.candidate)
    }
}
