//! Keyword Matcher: literal, case-insensitive, whole-word keyword presence.
//!
//! Keywords are regex-escaped before anchoring, so internal punctuation
//! (`Node.js`, `C++`) is matched literally. A side whose keyword character is
//! not a word character cannot use `\b`; it is anchored by the start/end of the
//! text or a non-word character instead.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::scoring::error::ConfigurationError;
use crate::scoring::taxonomy::{KeywordCategory, KeywordEntry, Taxonomy};

/// Keywords found in one text, in taxonomy declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub matched: Vec<KeywordEntry>,
    /// Every category of the taxonomy, including those with no matches.
    pub by_category: BTreeMap<KeywordCategory, Vec<String>>,
}

impl MatchResult {
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn keywords(&self) -> Vec<String> {
        self.matched.iter().map(|e| e.keyword.clone()).collect()
    }
}

/// Builds the whole-word, case-insensitive pattern for a keyword literal.
pub(crate) fn compile_keyword(keyword: &str) -> Result<Regex, ConfigurationError> {
    let (first, last) = match (keyword.trim().chars().next(), keyword.trim().chars().last()) {
        (Some(first), Some(last)) if keyword.trim() == keyword => (first, last),
        _ => {
            return Err(ConfigurationError::InvalidKeyword {
                keyword: keyword.to_string(),
                reason: "keywords must be non-empty with no surrounding whitespace".to_string(),
            })
        }
    };

    let leading = if is_word_char(first) { r"\b" } else { r"(?:^|\W)" };
    let trailing = if is_word_char(last) { r"\b" } else { r"(?:\W|$)" };
    let pattern = format!("{leading}{}{trailing}", regex::escape(keyword));

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigurationError::InvalidKeyword {
            keyword: keyword.to_string(),
            reason: e.to_string(),
        })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scans `text` for every taxonomy entry. Pure function of its inputs.
pub fn match_keywords(text: &str, taxonomy: &Taxonomy) -> MatchResult {
    let mut by_category: BTreeMap<KeywordCategory, Vec<String>> = taxonomy
        .categories()
        .into_iter()
        .map(|c| (c, Vec::new()))
        .collect();

    // Taxonomy entries are unique, so each entry is pushed at most once.
    let matched: Vec<KeywordEntry> = taxonomy
        .compiled()
        .iter()
        .filter(|k| k.pattern.is_match(text))
        .map(|k| k.entry.clone())
        .collect();

    for entry in &matched {
        by_category
            .entry(entry.category)
            .or_default()
            .push(entry.keyword.clone());
    }

    MatchResult {
        matched,
        by_category,
    }
}

/// `matched / taxonomy_size * 100`, capped at 100.
pub fn keyword_score(matched: usize, taxonomy_size: usize) -> f64 {
    if taxonomy_size == 0 {
        return 0.0;
    }
    (matched as f64 / taxonomy_size as f64 * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy(words: &[(&str, KeywordCategory)]) -> Taxonomy {
        Taxonomy::new(
            words
                .iter()
                .map(|(w, c)| KeywordEntry::new(*w, *c))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let t = taxonomy(&[("Python", KeywordCategory::Technical)]);
        let result = match_keywords("wrote PYTHON daily", &t);
        assert_eq!(result.keywords(), vec!["Python"]);
    }

    #[test]
    fn test_match_requires_whole_word() {
        let t = taxonomy(&[("Python", KeywordCategory::Technical)]);
        assert!(match_keywords("a very pythonic codebase", &t).is_empty());
        assert_eq!(match_keywords("Python, Rust and Go", &t).len(), 1);
    }

    #[test]
    fn test_punctuation_in_keyword_is_literal() {
        let t = taxonomy(&[("Node.js", KeywordCategory::Technical)]);
        assert_eq!(match_keywords("Built services in Node.js.", &t).len(), 1);
        // An unescaped '.' would match any character here.
        assert!(match_keywords("Built services in Nodexjs", &t).is_empty());
    }

    #[test]
    fn test_keyword_ending_in_symbol_matches() {
        let t = taxonomy(&[("C++", KeywordCategory::Technical)]);
        assert_eq!(match_keywords("Languages: C++, Rust", &t).len(), 1);
        assert_eq!(match_keywords("C++", &t).len(), 1);
        assert!(match_keywords("ABC++", &t).is_empty());
    }

    #[test]
    fn test_keyword_starting_with_symbol_matches() {
        let t = taxonomy(&[(".NET", KeywordCategory::Technical)]);
        assert_eq!(match_keywords("Shipped .NET services", &t).len(), 1);
        assert!(match_keywords("Shipped ASP.NETCore", &t).is_empty());
    }

    #[test]
    fn test_multi_word_keyword() {
        let t = taxonomy(&[("Problem Solving", KeywordCategory::Generic)]);
        assert_eq!(match_keywords("strong problem solving skills", &t).len(), 1);
        assert!(match_keywords("problem-solving", &t).is_empty());
    }

    #[test]
    fn test_repeated_keyword_counted_once() {
        let t = taxonomy(&[("SQL", KeywordCategory::Technical)]);
        let result = match_keywords("SQL sql Sql SQL", &t);
        assert_eq!(result.keywords(), vec!["SQL"]);
    }

    #[test]
    fn test_matches_follow_declaration_order() {
        let t = taxonomy(&[
            ("Budget", KeywordCategory::Business),
            ("Git", KeywordCategory::Technical),
            ("Leadership", KeywordCategory::Generic),
        ]);
        let result = match_keywords("leadership, git and a budget", &t);
        assert_eq!(result.keywords(), vec!["Budget", "Git", "Leadership"]);
    }

    #[test]
    fn test_partition_includes_empty_categories() {
        let t = taxonomy(&[
            ("Leadership", KeywordCategory::Generic),
            ("Python", KeywordCategory::Technical),
        ]);
        let result = match_keywords("Python", &t);
        assert_eq!(result.by_category[&KeywordCategory::Technical], vec!["Python"]);
        assert!(result.by_category[&KeywordCategory::Generic].is_empty());
        assert!(!result.by_category.contains_key(&KeywordCategory::Business));
    }

    #[test]
    fn test_keyword_score_ratio_to_taxonomy_size() {
        assert_eq!(keyword_score(0, 20), 0.0);
        assert_eq!(keyword_score(10, 20), 50.0);
        assert_eq!(keyword_score(20, 20), 100.0);
        assert_eq!(keyword_score(30, 20), 100.0);
        assert_eq!(keyword_score(3, 0), 0.0);
    }
}
