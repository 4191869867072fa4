//! Question generator configuration

use serde::{Deserialize, Serialize};

/// Question generator configuration
///
/// A fixed `seed` makes a practice session reproducible; without one the
/// generator draws a seed from the thread RNG and reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed for the question RNG (None for a random seed)
    pub seed: Option<u64>,
    /// Drafts tried per question before giving up
    pub max_attempts: u32,
    /// Candidate matrices tried when drawing a Hill 2×2 key
    pub hill_key_attempts: u32,
    /// Fewest words in a drafted phrase
    pub min_phrase_words: usize,
    /// Most words in a drafted phrase
    pub max_phrase_words: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts: 5,
            hill_key_attempts: 1_000,
            min_phrase_words: 2,
            max_phrase_words: 4,
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set drafts tried per question
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set candidate matrices tried per Hill key
    pub fn with_hill_key_attempts(mut self, attempts: u32) -> Self {
        self.hill_key_attempts = attempts;
        self
    }

    /// Set the phrase length range in words
    pub fn with_phrase_words(mut self, min: usize, max: usize) -> Self {
        self.min_phrase_words = min;
        self.max_phrase_words = max;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }

        if self.hill_key_attempts == 0 {
            return Err("hill_key_attempts must be greater than 0".to_string());
        }

        if self.min_phrase_words == 0 {
            return Err("min_phrase_words must be greater than 0".to_string());
        }

        if self.min_phrase_words > self.max_phrase_words {
            return Err(format!(
                "min_phrase_words ({}) must not exceed max_phrase_words ({})",
                self.min_phrase_words, self.max_phrase_words
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builders() {
        let config = GeneratorConfig::new()
            .with_seed(42)
            .with_max_attempts(9)
            .with_hill_key_attempts(10)
            .with_phrase_words(1, 1);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_attempts, 9);
        assert_eq!(config.hill_key_attempts, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        assert!(
            GeneratorConfig::new()
                .with_max_attempts(0)
                .validate()
                .is_err()
        );
        assert!(
            GeneratorConfig::new()
                .with_hill_key_attempts(0)
                .validate()
                .is_err()
        );
        let err = GeneratorConfig::new()
            .with_phrase_words(4, 2)
            .validate()
            .unwrap_err();
        assert!(err.contains("must not exceed"));
    }
}
