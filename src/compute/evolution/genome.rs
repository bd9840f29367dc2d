//! Candidate manipulation utilities for evolutionary search.
//!
//! Provides random generation, crossover, and mutation operations.

use log::warn;
use rand::prelude::*;

use crate::schema::{Candidate, CrossoverMethod};

/// Symbols a candidate may contain.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Random number generator wrapper for candidate operations.
///
/// Owned by the engine so runs can be reproduced from a seed.
pub struct CandidateRng {
    rng: StdRng,
    seed: u64,
}

impl CandidateRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly random lowercase letter.
    pub fn random_letter(&mut self) -> char {
        ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char
    }

    /// Generate a candidate of `length` uniformly random letters.
    pub fn random_candidate(&mut self, length: usize) -> Candidate {
        (0..length).map(|_| self.random_letter()).collect()
    }

    /// Bernoulli trial that succeeds with probability `rate`.
    pub fn chance(&mut self, rate: f64) -> bool {
        self.rng.r#gen::<f64>() < rate
    }

    /// Uniform value in `[0, upper)`. `upper` must be positive.
    pub fn uniform(&mut self, upper: f64) -> f64 {
        self.rng.gen_range(0.0..upper)
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Recombine two parents with the given strategy.
    pub fn crossover(
        &mut self,
        method: CrossoverMethod,
        parent1: &Candidate,
        parent2: &Candidate,
    ) -> (Candidate, Candidate) {
        match method {
            CrossoverMethod::SinglePoint => self.single_point_crossover(parent1, parent2),
            CrossoverMethod::Order => self.order_crossover(parent1, parent2),
        }
    }

    /// Splice the parents at one cut point in `[1, L-1]`.
    ///
    /// The first child takes `parent1`'s prefix and `parent2`'s suffix, the
    /// second child the complementary splice. Parents with `L <= 1` have no
    /// valid cut and are returned unchanged.
    pub fn single_point_crossover(
        &mut self,
        parent1: &Candidate,
        parent2: &Candidate,
    ) -> (Candidate, Candidate) {
        let Some((p1, p2)) = aligned_genes(parent1, parent2) else {
            return (parent1.clone(), parent2.clone());
        };
        if p1.len() <= 1 {
            return (parent1.clone(), parent2.clone());
        }

        let cut = self.rng.gen_range(1..p1.len());
        let child1 = p1[..cut].iter().chain(&p2[cut..]).copied().collect();
        let child2 = p2[..cut].iter().chain(&p1[cut..]).copied().collect();
        (child1, child2)
    }

    /// Segment-preserving order crossover.
    ///
    /// Each child keeps its own parent's `[lo, hi]` segment; the remaining
    /// slots are filled by walking the other parent from `hi + 1`, wrapping
    /// modulo `L` and skipping filled slots. Characters are not unique, so
    /// this is a structured character shuffle rather than a permutation
    /// preserving operator: the fill walk lines up with the slot walk, and
    /// every slot outside the segment receives the other parent's letter at
    /// the same position.
    pub fn order_crossover(
        &mut self,
        parent1: &Candidate,
        parent2: &Candidate,
    ) -> (Candidate, Candidate) {
        let Some((p1, p2)) = aligned_genes(parent1, parent2) else {
            return (parent1.clone(), parent2.clone());
        };
        if p1.len() <= 1 {
            return (parent1.clone(), parent2.clone());
        }

        let a = self.rng.gen_range(0..p1.len());
        let b = self.rng.gen_range(0..p1.len());
        let (lo, hi) = (a.min(b), a.max(b));

        (
            fill_around_segment(&p1, &p2, lo, hi),
            fill_around_segment(&p2, &p1, lo, hi),
        )
    }

    /// Per-locus random resetting.
    ///
    /// Every position is independently replaced by a random letter with
    /// probability `rate`; the replacement may equal the original.
    pub fn mutate(&mut self, candidate: &Candidate, rate: f64) -> Candidate {
        let mut mutated = String::with_capacity(candidate.as_str().len());
        for gene in candidate.as_str().chars() {
            if self.chance(rate) {
                mutated.push(self.random_letter());
            } else {
                mutated.push(gene);
            }
        }
        Candidate::from(mutated)
    }
}

/// Split both parents into characters, or `None` if their lengths differ.
fn aligned_genes(parent1: &Candidate, parent2: &Candidate) -> Option<(Vec<char>, Vec<char>)> {
    let p1: Vec<char> = parent1.as_str().chars().collect();
    let p2: Vec<char> = parent2.as_str().chars().collect();
    if p1.len() != p2.len() {
        warn!(
            "crossover received parents of different lengths ({} vs {})",
            p1.len(),
            p2.len()
        );
        return None;
    }
    Some((p1, p2))
}

/// Copy `keep[lo..=hi]` and fill the other slots from `other`.
fn fill_around_segment(keep: &[char], other: &[char], lo: usize, hi: usize) -> Candidate {
    let len = keep.len();
    let mut child: Vec<Option<char>> = vec![None; len];
    for (slot, &gene) in child[lo..=hi].iter_mut().zip(&keep[lo..=hi]) {
        *slot = Some(gene);
    }

    let slots: Vec<usize> = (0..len)
        .map(|k| (hi + 1 + k) % len)
        .filter(|&pos| child[pos].is_none())
        .collect();
    let source = (0..len).map(|k| other[(hi + 1 + k) % len]);

    for (slot, gene) in slots.into_iter().zip(source) {
        child[slot] = Some(gene);
    }

    child.into_iter().flatten().collect()
}
