//! Section Detector: case-insensitive presence of canonical section headers.

use crate::scoring::error::ConfigurationError;
use crate::scoring::taxonomy::SectionSpec;

/// Percentage of canonical sections whose name occurs anywhere in `text`.
pub fn detect_completeness(text: &str, sections: &SectionSpec) -> Result<f64, ConfigurationError> {
    if sections.is_empty() {
        return Err(ConfigurationError::EmptySections);
    }
    let present = sections.len() - missing_sections(text, sections).len();
    Ok(present as f64 / sections.len() as f64 * 100.0)
}

/// Section names not found in `text`, in declaration order.
pub fn missing_sections<'a>(text: &str, sections: &'a SectionSpec) -> Vec<&'a str> {
    let text_lower = text.to_lowercase();
    sections
        .names()
        .iter()
        .filter(|name| !text_lower.contains(&name.to_lowercase()))
        .map(String::as_str)
        .collect()
}
