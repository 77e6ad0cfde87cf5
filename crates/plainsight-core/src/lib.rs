//! Core contract for Plainsight: submissions, result shapes, prompt builders,
//! and interpretation of the remote model's free-text replies.

pub mod fallback;
pub mod interpret;
pub mod prompt;
pub mod request;
pub mod result;

pub use interpret::{
    Outcome, OutcomeStatus, SchemaViolation, analysis_fallback, interpret_analysis,
    interpret_simplification, simplification_fallback,
};
pub use prompt::{misinformation_prompt, simplification_prompt};
pub use request::{AnalysisRequest, ContentMode, SimplificationRequest};
pub use result::{AnalysisResult, KeyTerm, Level, ReadingLevel, SimplificationResult};
