//! Oracle that holds the secret word and scores guesses against it.

/// Scores candidate guesses against a hidden target.
///
/// The engine only relies on this capability set, so alternative scorers
/// (partial credit, weighted positions) can be plugged in.
pub trait Oracle {
    /// Non-negative distance between `candidate` and the secret; 0 is a match.
    fn distance(&self, candidate: &str) -> usize;

    /// Whether `candidate` is the secret.
    fn is_match(&self, candidate: &str) -> bool;
}

/// Oracle scoring guesses by Hamming distance to a secret word.
#[derive(Debug, Clone)]
pub struct WordOracle {
    secret: String,
    length: usize,
}

impl WordOracle {
    /// Create an oracle for `secret`, normalized to lowercase.
    ///
    /// Input validation is the caller's job; see [`normalize_word`].
    pub fn new(secret: &str) -> Self {
        let secret = secret.to_lowercase();
        let length = secret.chars().count();
        Self { secret, length }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Length of the secret in characters.
    pub fn word_length(&self) -> usize {
        self.length
    }
}

impl Oracle for WordOracle {
    /// Hamming distance to the secret. Guesses of the wrong length get the
    /// maximal penalty (the secret's length).
    fn distance(&self, candidate: &str) -> usize {
        if candidate.chars().count() != self.length {
            return self.length;
        }

        candidate
            .chars()
            .zip(self.secret.chars())
            .filter(|(guess, target)| guess != target)
            .count()
    }

    fn is_match(&self, candidate: &str) -> bool {
        candidate.to_lowercase() == self.secret
    }
}

/// Validate raw user input and normalize it into a secret word.
///
/// Surrounding whitespace is trimmed, the word must be non-empty ASCII
/// letters only, and is returned lowercased.
pub fn normalize_word(input: &str) -> Result<String, WordError> {
    let word = input.trim();
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(WordError::NonAlphabetic(bad));
    }
    Ok(word.to_ascii_lowercase())
}

/// Secret word validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only letters, found {0:?}")]
    NonAlphabetic(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_has_zero_distance() {
        let oracle = WordOracle::new("cat");
        assert_eq!(oracle.distance("cat"), 0);
        assert!(oracle.is_match("cat"));
    }

    #[test]
    fn test_hamming_distance() {
        let oracle = WordOracle::new("cat");
        assert_eq!(oracle.distance("cot"), 1);
        assert_eq!(oracle.distance("dog"), 3);
        assert_eq!(oracle.distance("car"), 1);
        assert!(!oracle.is_match("cot"));
    }

    #[test]
    fn test_wrong_length_gets_max_penalty() {
        let oracle = WordOracle::new("cat");
        assert_eq!(oracle.distance("ca"), 3);
        assert_eq!(oracle.distance("cats"), 3);
        assert_eq!(oracle.distance(""), 3);
    }

    #[test]
    fn test_secret_is_lowercased() {
        let oracle = WordOracle::new("CaT");
        assert_eq!(oracle.secret(), "cat");
        assert_eq!(oracle.word_length(), 3);
        assert_eq!(oracle.distance("cat"), 0);
        assert!(oracle.is_match("CAT"));
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  Hello \n"), Ok("hello".to_string()));
        assert_eq!(normalize_word("   "), Err(WordError::Empty));
        assert_eq!(normalize_word("he llo"), Err(WordError::NonAlphabetic(' ')));
        assert_eq!(normalize_word("abc1"), Err(WordError::NonAlphabetic('1')));
        assert_eq!(normalize_word("café"), Err(WordError::NonAlphabetic('é')));
    }
}
