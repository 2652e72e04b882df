use serde::{Deserialize, Serialize};

use crate::scoring::error::ConfigurationError;

/// Score awarded when the word count falls inside the optimal range.
pub const IN_RANGE_SCORE: f64 = 100.0;
/// Score awarded otherwise.
pub const OUT_OF_RANGE_SCORE: f64 = 60.0;

/// Inclusive optimal word-count bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRange {
    pub min: usize,
    pub max: usize,
}

impl WordRange {
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigurationError> {
        if min > max {
            return Err(ConfigurationError::InvalidWordRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, word_count: usize) -> bool {
        (self.min..=self.max).contains(&word_count)
    }
}

impl Default for WordRange {
    fn default() -> Self {
        Self { min: 400, max: 800 }
    }
}

/// Number of whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn evaluate_length(word_count: usize, range: WordRange) -> f64 {
    if range.contains(word_count) {
        IN_RANGE_SCORE
    } else {
        OUT_OF_RANGE_SCORE
    }
}
