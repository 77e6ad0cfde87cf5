//! Placeholder results shown when a submission cannot be interpreted.

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::result::{AnalysisResult, KeyTerm, Level, ReadingLevel, SimplificationResult};

pub const ANALYSIS_FINDINGS: [&str; 2] = [
    "Unable to complete full analysis due to API error",
    "Please try again or contact support",
];
pub const ANALYSIS_SOURCES: [&str; 1] = ["Fallback analysis system"];
pub const ANALYSIS_SUMMARY: &str = "Analysis could not be completed. Please try again.";

pub const SIMPLIFIED_TEXT: &str = "Unable to simplify document due to API error. Please try again.";
pub const SIMPLIFICATION_TERM: &str = "API Error";
pub const SIMPLIFICATION_DEFINITION: &str = "A technical issue prevented the simplification process";
pub const SIMPLIFICATION_SUMMARY: &str =
    "Document simplification could not be completed. Please try again.";
pub const READING_LEVEL: &str = "Unable to determine → Please retry";
/// Shown as the original text when the submission itself was blank.
pub const SAMPLE_ORIGINAL_TEXT: &str = "Sample legal text...";

/// Placeholder misinformation result.
///
/// The score lands in `30..70` and the risk is medium or high. Both are
/// derived from a `DefaultHasher` digest of `seed` (the submitted content),
/// so the same submission gets the same placeholder within one build. The
/// std hasher is not guaranteed stable across Rust releases, so the values
/// may differ between builds.
pub fn analysis(seed: &str) -> AnalysisResult {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let h = hasher.finish();

    AnalysisResult {
        credibility_score: 30 + (h % 40) as u8,
        risk_level: if (h >> 32) & 1 == 0 {
            Level::Medium
        } else {
            Level::High
        },
        findings: ANALYSIS_FINDINGS.iter().map(|s| s.to_string()).collect(),
        sources: ANALYSIS_SOURCES.iter().map(|s| s.to_string()).collect(),
        summary: ANALYSIS_SUMMARY.to_string(),
    }
}

/// Placeholder simplification result for `original_text`.
pub fn simplification(original_text: &str) -> SimplificationResult {
    let original_text = if original_text.trim().is_empty() {
        SAMPLE_ORIGINAL_TEXT
    } else {
        original_text
    };

    SimplificationResult {
        original_text: original_text.to_string(),
        simplified_text: SIMPLIFIED_TEXT.to_string(),
        key_terms: vec![KeyTerm {
            term: SIMPLIFICATION_TERM.to_string(),
            definition: SIMPLIFICATION_DEFINITION.to_string(),
        }],
        summary: SIMPLIFICATION_SUMMARY.to_string(),
        complexity: Level::High,
        reading_level: ReadingLevel::new(READING_LEVEL),
    }
}
