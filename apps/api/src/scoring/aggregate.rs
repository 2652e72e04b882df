//! Score Aggregator: combines sub-scores and renders rule-based feedback.
//!
//! Feedback rules are evaluated in a fixed order and joined with `"; "`:
//! 1. completeness < 80 → missing sections
//! 2. keyword score < 50 → more keywords
//! 3. length score < 80 → adjust length
//!
//! When no rule fires the feedback is `"Resume looks good!"`.

use serde::{Deserialize, Serialize};

use crate::scoring::length::WordRange;

const COMPLETENESS_THRESHOLD: f64 = 80.0;
const KEYWORD_THRESHOLD: f64 = 50.0;
const LENGTH_THRESHOLD: f64 = 80.0;

pub const LOOKS_GOOD: &str = "Resume looks good!";
pub const MORE_KEYWORDS: &str = "Include more relevant technical keywords";

/// The three named sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub completeness: f64,
    pub keyword_score: f64,
    pub length_score: f64,
}

impl ScoreBreakdown {
    /// Copy with every sub-score rounded to one decimal, for presentation.
    pub fn rounded(&self) -> Self {
        Self {
            completeness: round_one_decimal(self.completeness),
            keyword_score: round_one_decimal(self.keyword_score),
            length_score: round_one_decimal(self.length_score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub breakdown: ScoreBreakdown,
    /// Unweighted mean of the sub-scores, rounded to one decimal.
    pub overall: f64,
}

/// Rounds half away from zero: 12.25 → 12.3, 12.24 → 12.2.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn aggregate(completeness: f64, keyword_score: f64, length_score: f64) -> Aggregate {
    let breakdown = ScoreBreakdown {
        completeness: completeness.clamp(0.0, 100.0),
        keyword_score: keyword_score.clamp(0.0, 100.0),
        length_score: length_score.clamp(0.0, 100.0),
    };
    let mean = (breakdown.completeness + breakdown.keyword_score + breakdown.length_score) / 3.0;

    Aggregate {
        breakdown,
        overall: round_one_decimal(mean),
    }
}

/// Renders the feedback string for a breakdown.
///
/// `missing_sections` is listed verbatim in the first rule's message.
pub fn render_feedback(
    breakdown: &ScoreBreakdown,
    missing_sections: &[&str],
    range: WordRange,
) -> String {
    let mut parts = Vec::new();

    if breakdown.completeness < COMPLETENESS_THRESHOLD {
        parts.push(format!(
            "Consider adding missing sections ({})",
            missing_sections.join(", ")
        ));
    }
    if breakdown.keyword_score < KEYWORD_THRESHOLD {
        parts.push(MORE_KEYWORDS.to_string());
    }
    if breakdown.length_score < LENGTH_THRESHOLD {
        parts.push(format!(
            "Adjust resume length to be between {}-{} words",
            range.min, range.max
        ));
    }

    if parts.is_empty() {
        LOOKS_GOOD.to_string()
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(completeness: f64, keyword_score: f64, length_score: f64) -> ScoreBreakdown {
        aggregate(completeness, keyword_score, length_score).breakdown
    }

    #[test]
    fn test_overall_is_unweighted_mean() {
        let agg = aggregate(100.0, 50.0, 60.0);
        assert_eq!(agg.overall, 70.0);
    }

    #[test]
    fn test_overall_rounded_to_one_decimal() {
        // (40 + 15 + 100) / 3 = 51.666…
        assert_eq!(aggregate(40.0, 15.0, 100.0).overall, 51.7);
        // (0 + 0 + 60) / 3 = 20
        assert_eq!(aggregate(0.0, 0.0, 60.0).overall, 20.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_one_decimal(0.25), 0.3);
        assert_eq!(round_one_decimal(12.24), 12.2);
        assert_eq!(round_one_decimal(33.333_333), 33.3);
    }

    #[test]
    fn test_sub_scores_clamped() {
        let agg = aggregate(120.0, -5.0, 100.0);
        assert_eq!(agg.breakdown.completeness, 100.0);
        assert_eq!(agg.breakdown.keyword_score, 0.0);
        assert!(agg.overall <= 100.0);
    }

    #[test]
    fn test_feedback_all_rules_in_order() {
        let feedback = render_feedback(
            &breakdown(0.0, 0.0, 60.0),
            &["Education", "Skills"],
            WordRange::default(),
        );
        assert_eq!(
            feedback,
            "Consider adding missing sections (Education, Skills); \
             Include more relevant technical keywords; \
             Adjust resume length to be between 400-800 words"
        );
    }

    #[test]
    fn test_feedback_single_rule() {
        let feedback = render_feedback(&breakdown(100.0, 10.0, 100.0), &[], WordRange::default());
        assert_eq!(feedback, MORE_KEYWORDS);
    }

    #[test]
    fn test_feedback_uses_configured_range() {
        let range = WordRange::new(300, 600).unwrap();
        let feedback = render_feedback(&breakdown(100.0, 100.0, 60.0), &[], range);
        assert_eq!(feedback, "Adjust resume length to be between 300-600 words");
    }

    #[test]
    fn test_feedback_thresholds_are_strict() {
        let feedback = render_feedback(&breakdown(80.0, 50.0, 80.0), &[], WordRange::default());
        assert_eq!(feedback, LOOKS_GOOD);
    }

    #[test]
    fn test_rounded_breakdown() {
        let rounded = breakdown(33.333, 66.666, 100.0).rounded();
        assert_eq!(rounded.completeness, 33.3);
        assert_eq!(rounded.keyword_score, 66.7);
    }
}
