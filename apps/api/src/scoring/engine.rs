//! Engine Facade: the single entry point that turns extracted text into a `Report`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::aggregate::{aggregate, render_feedback, ScoreBreakdown};
use crate::scoring::error::ConfigurationError;
use crate::scoring::keywords::{keyword_score, match_keywords};
use crate::scoring::length::{count_words, evaluate_length, WordRange};
use crate::scoring::sections::{detect_completeness, missing_sections};
use crate::scoring::taxonomy::{KeywordCategory, SectionSpec, Taxonomy};

/// Result of one scoring invocation. Serializes to the public JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub score: f64,
    pub feedback: String,
    pub keywords: Vec<String>,
    pub keyword_categories: BTreeMap<KeywordCategory, Vec<String>>,
    pub detailed_scores: ScoreBreakdown,
    pub word_count: usize,
    pub keywords_found: usize,
    pub total_keywords: usize,
}

/// Holds the read-only catalogs. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    taxonomy: Taxonomy,
    sections: SectionSpec,
    word_range: WordRange,
}

impl ScoringEngine {
    pub fn new(
        taxonomy: Taxonomy,
        sections: SectionSpec,
        word_range: WordRange,
    ) -> Result<Self, ConfigurationError> {
        if taxonomy.is_empty() {
            return Err(ConfigurationError::EmptyTaxonomy);
        }
        if sections.is_empty() {
            return Err(ConfigurationError::EmptySections);
        }
        Ok(Self {
            taxonomy,
            sections,
            word_range,
        })
    }

    /// Built-in taxonomy and sections with the given word range.
    pub fn with_builtin_catalog(word_range: WordRange) -> Result<Self, ConfigurationError> {
        Self::new(Taxonomy::builtin()?, SectionSpec::builtin(), word_range)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn word_range(&self) -> WordRange {
        self.word_range
    }

    /// Scores any text, including the empty string.
    pub fn score_resume(&self, text: &str) -> Report {
        // Sections are validated non-empty in `new`.
        let completeness = detect_completeness(text, &self.sections).unwrap_or(0.0);
        let matches = match_keywords(text, &self.taxonomy);
        let word_count = count_words(text);

        let keyword = keyword_score(matches.len(), self.taxonomy.len());
        let length = evaluate_length(word_count, self.word_range);

        let aggregate = aggregate(completeness, keyword, length);
        let missing = missing_sections(text, &self.sections);
        let feedback = render_feedback(&aggregate.breakdown, &missing, self.word_range);

        Report {
            score: aggregate.overall,
            feedback,
            keywords: matches.keywords(),
            keywords_found: matches.len(),
            keyword_categories: matches.by_category,
            detailed_scores: aggregate.breakdown.rounded(),
            word_count,
            total_keywords: self.taxonomy.len(),
        }
    }
}
