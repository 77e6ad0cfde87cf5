//! Interpretation of the remote model's raw reply.
//!
//! A reply goes through three stages: strict JSON parse, typed decode into
//! the result shape, then field checks. Any failure swaps in the tool's
//! placeholder result, but the cause is kept in [`OutcomeStatus`] so callers
//! can tell an unreachable model from one that returned garbage.

use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Number;
use thiserror::Error;
use tracing::warn;

use crate::fallback;
use crate::result::{AnalysisResult, Level, SimplificationResult};

/// A field-level problem with an otherwise parseable reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("reply does not match the expected shape: {0}")]
    Shape(String),
    #[error("credibilityScore {0} is not a whole number in 0..=100")]
    ScoreOutOfRange(Number),
    #[error("readingLevel {0:?} must contain exactly one '→'")]
    ReadingLevelSeparator(String),
}

/// Why a result is (or is not) the model's own answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    Success,
    /// The request never produced a reply (network, non-2xx, bad envelope).
    TransportError(String),
    /// The reply was not a JSON document.
    ParseError(String),
    /// The reply was JSON but not a valid result.
    SchemaError(Vec<SchemaViolation>),
}

impl OutcomeStatus {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::TransportError(_) => "transport_error",
            Self::ParseError(_) => "parse_error",
            Self::SchemaError(_) => "schema_error",
        }
    }

    /// Human-readable detail, `None` on success.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Success => None,
            Self::TransportError(msg) | Self::ParseError(msg) => Some(msg.clone()),
            Self::SchemaError(violations) => Some(
                violations
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
        }
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{}: {}", self.kind(), detail),
            None => f.write_str(self.kind()),
        }
    }
}

/// The result to display plus how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub result: T,
    pub status: OutcomeStatus,
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }

    pub fn is_fallback(&self) -> bool {
        !self.is_success()
    }
}

// ── Misinformation ──

/// Misinformation reply as sent by the model. The score stays a raw JSON
/// number until it has been range-checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReply {
    credibility_score: Number,
    risk_level: Level,
    findings: Vec<String>,
    sources: Vec<String>,
    summary: String,
}

/// Interpret a raw misinformation reply for the submission `content`.
pub fn interpret_analysis(raw: &str, content: &str) -> Outcome<AnalysisResult> {
    let status = match decode::<AnalysisReply>(raw) {
        Ok(reply) => match credibility_score(&reply.credibility_score) {
            Some(score) => {
                return Outcome {
                    result: AnalysisResult {
                        credibility_score: score,
                        risk_level: reply.risk_level,
                        findings: reply.findings,
                        sources: reply.sources,
                        summary: reply.summary,
                    },
                    status: OutcomeStatus::Success,
                };
            }
            None => OutcomeStatus::SchemaError(vec![SchemaViolation::ScoreOutOfRange(
                reply.credibility_score,
            )]),
        },
        Err(status) => status,
    };
    analysis_fallback(content, status)
}

/// Placeholder misinformation outcome for a failed submission.
pub fn analysis_fallback(content: &str, status: OutcomeStatus) -> Outcome<AnalysisResult> {
    warn!(tool = "misinformation", %status, "substituting placeholder result");
    Outcome {
        result: fallback::analysis(content),
        status,
    }
}

/// JSON has one number type, so `72` and `72.0` are the same score.
fn credibility_score(number: &Number) -> Option<u8> {
    if let Some(n) = number.as_u64() {
        return u8::try_from(n).ok().filter(|n| *n <= 100);
    }
    if number.is_i64() {
        return None;
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && (0.0..=100.0).contains(f))
        .map(|f| f as u8)
}

// ── Simplification ──

/// Interpret a raw simplification reply for the submitted `original_text`.
///
/// `originalText` always comes from the submission; a value supplied by the
/// model is overwritten.
pub fn interpret_simplification(raw: &str, original_text: &str) -> Outcome<SimplificationResult> {
    let status = match decode::<SimplificationResult>(raw) {
        Ok(mut result) => {
            let violations = check_simplification(&result);
            if violations.is_empty() {
                result.original_text = original_text.to_string();
                return Outcome {
                    result,
                    status: OutcomeStatus::Success,
                };
            }
            OutcomeStatus::SchemaError(violations)
        }
        Err(status) => status,
    };
    simplification_fallback(original_text, status)
}

/// Placeholder simplification outcome for a failed submission.
pub fn simplification_fallback(
    original_text: &str,
    status: OutcomeStatus,
) -> Outcome<SimplificationResult> {
    warn!(tool = "simplification", %status, "substituting placeholder result");
    Outcome {
        result: fallback::simplification(original_text),
        status,
    }
}

fn check_simplification(result: &SimplificationResult) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    if !result.reading_level.is_well_formed() {
        violations.push(SchemaViolation::ReadingLevelSeparator(
            result.reading_level.as_str().to_string(),
        ));
    }
    violations
}

// ── Shared stages ──

/// Strict parse, then typed decode.
fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, OutcomeStatus> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| OutcomeStatus::ParseError(e.to_string()))?;
    serde_json::from_value(value)
        .map_err(|e| OutcomeStatus::SchemaError(vec![SchemaViolation::Shape(e.to_string())]))
}
