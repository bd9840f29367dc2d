//! Property tests for the oracle and the genetic operators.

use henyo::compute::evolution::{CandidateRng, EvolutionEngine};
use henyo::compute::{Oracle, WordOracle};
use henyo::schema::{Candidate, CrossoverMethod, GeneticAlgorithmConfig};
use proptest::prelude::*;
use proptest::string::string_regex;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// A secret and a same-length guess, both lowercase.
fn arb_secret_and_guess() -> impl Strategy<Value = (String, String)> {
    (1usize..12).prop_flat_map(|len| {
        let pattern = format!("[a-z]{{{len}}}");
        (
            string_regex(&pattern).unwrap(),
            string_regex(&pattern).unwrap(),
        )
    })
}

/// Two parents of equal length of at least 2.
fn arb_parents() -> impl Strategy<Value = (String, String)> {
    (2usize..16).prop_flat_map(|len| {
        let pattern = format!("[a-z]{{{len}}}");
        (
            string_regex(&pattern).unwrap(),
            string_regex(&pattern).unwrap(),
        )
    })
}

fn hamming(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

// ---------------------------------------------------------------------------
// Oracle
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn distance_is_hamming((secret, guess) in arb_secret_and_guess()) {
        let oracle = WordOracle::new(&secret);
        prop_assert_eq!(oracle.distance(&guess), hamming(&secret, &guess));
        prop_assert!(oracle.distance(&guess) <= secret.len());
    }

    #[test]
    fn zero_distance_iff_match((secret, guess) in arb_secret_and_guess()) {
        let oracle = WordOracle::new(&secret);
        prop_assert_eq!(oracle.distance(&guess) == 0, oracle.is_match(&guess));
        prop_assert!(oracle.is_match(&secret));
    }

    #[test]
    fn distance_is_symmetric((a, b) in arb_secret_and_guess()) {
        let forward = WordOracle::new(&a).distance(&b);
        let backward = WordOracle::new(&b).distance(&a);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn wrong_length_gets_max_penalty(secret in "[a-z]{1,10}", guess in "[a-z]{0,12}") {
        prop_assume!(guess.len() != secret.len());
        let oracle = WordOracle::new(&secret);
        prop_assert_eq!(oracle.distance(&guess), secret.len());
    }
}

// ---------------------------------------------------------------------------
// Genetic operators
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn single_point_is_a_splice((p1, p2) in arb_parents(), seed in any::<u64>()) {
        let mut rng = CandidateRng::new(seed);
        let (c1, c2) = rng.single_point_crossover(
            &Candidate::from(p1.as_str()),
            &Candidate::from(p2.as_str()),
        );

        let spliced = (1..p1.len()).any(|cut| {
            c1.as_str() == format!("{}{}", &p1[..cut], &p2[cut..])
                && c2.as_str() == format!("{}{}", &p2[..cut], &p1[cut..])
        });
        prop_assert!(spliced);
    }

    #[test]
    fn order_crossover_keeps_contiguous_segment(
        (p1, p2) in arb_parents(),
        seed in any::<u64>(),
    ) {
        let mut rng = CandidateRng::new(seed);
        let (c1, c2) = rng.crossover(
            CrossoverMethod::Order,
            &Candidate::from(p1.as_str()),
            &Candidate::from(p2.as_str()),
        );

        // Some non-empty window [lo, hi] comes from the child's own parent and
        // the rest from the other parent, position by position.
        let len = p1.len();
        let found = (0..len).any(|lo| {
            (lo..len).any(|hi| {
                let expect = |own: &str, other: &str| -> String {
                    (0..len)
                        .map(|i| {
                            if (lo..=hi).contains(&i) {
                                own.as_bytes()[i] as char
                            } else {
                                other.as_bytes()[i] as char
                            }
                        })
                        .collect()
                };
                c1.as_str() == expect(&p1, &p2) && c2.as_str() == expect(&p2, &p1)
            })
        });
        prop_assert!(found);
    }

    #[test]
    fn mutation_keeps_length_and_alphabet(
        word in "[a-z]{1,20}",
        rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = CandidateRng::new(seed);
        let mutated = rng.mutate(&Candidate::from(word.as_str()), rate);
        prop_assert_eq!(mutated.len(), word.len());
        prop_assert!(mutated.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn population_size_is_invariant(
        secret in "[a-z]{1,8}",
        size in 1usize..40,
        seed in any::<u64>(),
    ) {
        let oracle = WordOracle::new(&secret);
        let mut engine = EvolutionEngine::new(
            secret.len(),
            size,
            GeneticAlgorithmConfig::default(),
            CandidateRng::new(seed),
        )
        .unwrap();
        engine.initialize_population();

        let mut previous = usize::MAX;
        for _ in 0..5 {
            let best = engine.evolve(&oracle).unwrap();
            prop_assert_eq!(engine.population().len(), size);
            prop_assert!(best.distance <= previous);
            previous = best.distance;
        }
    }
}
