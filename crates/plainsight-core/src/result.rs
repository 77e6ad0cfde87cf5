//! Result shapes the remote model is asked to return.
//!
//! Field names on the wire are camelCase, matching the schema named in the
//! prompts. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Separator between the two halves of a [`ReadingLevel`].
pub const READING_LEVEL_SEPARATOR: char = '→';

/// Three-step scale shared by `riskLevel` and `complexity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Misinformation assessment for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0 (not credible) to 100 (fully credible).
    pub credibility_score: u8,
    pub risk_level: Level,
    pub findings: Vec<String>,
    pub sources: Vec<String>,
    pub summary: String,
}

/// A legal term and its plain-English definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
}

/// Plain-English rewrite of a legal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplificationResult {
    /// Filled from the submitted text, never from the model.
    #[serde(default)]
    pub original_text: String,
    pub simplified_text: String,
    pub key_terms: Vec<KeyTerm>,
    pub summary: String,
    pub complexity: Level,
    pub reading_level: ReadingLevel,
}

/// Free-text reading level formatted `"<original> → <simplified>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingLevel(String);

impl ReadingLevel {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the value contains exactly one separator.
    pub fn is_well_formed(&self) -> bool {
        self.0.matches(READING_LEVEL_SEPARATOR).count() == 1
    }

    /// Split into the original and simplified levels, trimmed.
    ///
    /// Never panics: without a separator the whole value is the original
    /// level and the simplified level is `None`. With several separators
    /// only the first one splits.
    pub fn split(&self) -> (&str, Option<&str>) {
        match self.0.split_once(READING_LEVEL_SEPARATOR) {
            Some((before, after)) => (before.trim(), Some(after.trim())),
            None => (self.0.trim(), None),
        }
    }
}

impl From<&str> for ReadingLevel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
