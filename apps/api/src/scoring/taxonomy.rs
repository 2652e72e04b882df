//! Keyword taxonomy and canonical résumé sections.
//!
//! Both are immutable once built. The engine receives them by value at startup,
//! so tests can score against alternate catalogs.

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::scoring::error::ConfigurationError;
use crate::scoring::keywords::compile_keyword;

// ────────────────────────────────────────────────────────────────────────────
// Built-in catalog
// ────────────────────────────────────────────────────────────────────────────

const GENERIC_KEYWORDS: &[&str] = &[
    "Leadership",
    "Communication",
    "Problem Solving",
    "Teamwork",
    "Project Management",
    "Collaboration",
    "Mentoring",
    "Research",
];

const TECHNICAL_KEYWORDS: &[&str] = &[
    "Python",
    "JavaScript",
    "SQL",
    "Machine Learning",
    "Git",
    "Node.js",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "Budget",
    "Revenue",
    "Strategy",
    "ROI",
    "KPI",
    "Process Improvement",
];

const CANONICAL_SECTIONS: &[&str] = &[
    "Education",
    "Experience",
    "Skills",
    "Projects",
    "Certifications",
];

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// Keyword grouping used for the category breakdown. Ordered by declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Generic,
    Technical,
    Business,
}

/// A single recognized keyword literal and its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub category: KeywordCategory,
}

impl KeywordEntry {
    pub fn new(keyword: impl Into<String>, category: KeywordCategory) -> Self {
        Self {
            keyword: keyword.into(),
            category,
        }
    }
}

/// An entry paired with its compiled whole-word pattern.
#[derive(Debug, Clone)]
pub(crate) struct CompiledKeyword {
    pub entry: KeywordEntry,
    pub pattern: Regex,
}

/// Ordered, duplicate-free keyword catalog.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    keywords: Vec<CompiledKeyword>,
}

impl Taxonomy {
    /// Validates and compiles the given entries, preserving declaration order.
    ///
    /// Duplicates are detected case-insensitively, since matching is case-insensitive.
    pub fn new(entries: Vec<KeywordEntry>) -> Result<Self, ConfigurationError> {
        if entries.is_empty() {
            return Err(ConfigurationError::EmptyTaxonomy);
        }

        let mut seen = HashSet::new();
        let mut keywords = Vec::with_capacity(entries.len());
        for entry in entries {
            if !seen.insert(entry.keyword.to_lowercase()) {
                return Err(ConfigurationError::DuplicateKeyword(entry.keyword));
            }
            let pattern = compile_keyword(&entry.keyword)?;
            keywords.push(CompiledKeyword { entry, pattern });
        }

        Ok(Self { keywords })
    }

    /// The built-in catalog: generic, then technical, then business keywords.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        let groups = [
            (KeywordCategory::Generic, GENERIC_KEYWORDS),
            (KeywordCategory::Technical, TECHNICAL_KEYWORDS),
            (KeywordCategory::Business, BUSINESS_KEYWORDS),
        ];
        let entries = groups
            .iter()
            .flat_map(|(category, words)| {
                words.iter().map(move |w| KeywordEntry::new(*w, *category))
            })
            .collect();
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    #[cfg(test)]
    pub fn entries(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.keywords.iter().map(|k| &k.entry)
    }

    /// Distinct categories present in the catalog, in `KeywordCategory` order.
    pub fn categories(&self) -> Vec<KeywordCategory> {
        let mut categories: Vec<_> = self.keywords.iter().map(|k| k.entry.category).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub(crate) fn compiled(&self) -> &[CompiledKeyword] {
        &self.keywords
    }
}

/// Ordered list of canonical section headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    names: Vec<String>,
}

impl SectionSpec {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Education, Experience, Skills, Projects, Certifications.
    pub fn builtin() -> Self {
        Self::new(CANONICAL_SECTIONS.iter().copied())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_taxonomy_has_twenty_entries() {
        let taxonomy = Taxonomy::builtin().unwrap();
        assert_eq!(taxonomy.len(), 20);
        assert_eq!(
            taxonomy.categories(),
            vec![
                KeywordCategory::Generic,
                KeywordCategory::Technical,
                KeywordCategory::Business
            ]
        );
    }

    #[test]
    fn test_builtin_taxonomy_preserves_declaration_order() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let first: Vec<&str> = taxonomy.entries().take(2).map(|e| e.keyword.as_str()).collect();
        assert_eq!(first, vec!["Leadership", "Communication"]);
        let last = taxonomy.entries().last().unwrap();
        assert_eq!(last.keyword, "Process Improvement");
        assert_eq!(last.category, KeywordCategory::Business);
    }

    #[test]
    fn test_empty_taxonomy_is_configuration_error() {
        let err = Taxonomy::new(vec![]).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyTaxonomy);
    }

    #[test]
    fn test_duplicate_keyword_rejected_case_insensitively() {
        let err = Taxonomy::new(vec![
            KeywordEntry::new("Python", KeywordCategory::Technical),
            KeywordEntry::new("python", KeywordCategory::Generic),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateKeyword("python".to_string()));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let err = Taxonomy::new(vec![KeywordEntry::new("  ", KeywordCategory::Generic)]).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidKeyword { .. }));
    }

    #[test]
    fn test_builtin_sections() {
        let sections = SectionSpec::builtin();
        assert_eq!(sections.len(), 5);
        assert_eq!(sections.names()[0], "Education");
        assert_eq!(sections.names()[4], "Certifications");
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&KeywordCategory::Technical).unwrap();
        assert_eq!(json, r#""technical""#);
    }
}
