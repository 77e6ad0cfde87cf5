//! Tool runners: build the prompt, invoke the model, interpret the reply.
//!
//! Each tool instance allows one submission at a time. A second `submit`
//! while the first is still pending is refused, not queued.

use std::sync::atomic::{AtomicBool, Ordering};

use plainsight_core::{
    AnalysisRequest, AnalysisResult, Outcome, OutcomeStatus, SimplificationRequest,
    SimplificationResult, analysis_fallback, interpret_analysis, interpret_simplification,
    misinformation_prompt, simplification_fallback, simplification_prompt,
};
use thiserror::Error;
use tracing::info;

use crate::client::CompletionClient;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("nothing to submit: content is empty")]
    EmptyInput,
    #[error("a submission is already in flight on this tool")]
    InFlight,
}

/// Holds the in-flight flag until dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, SubmitError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| SubmitError::InFlight)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// ── Misinformation ──

/// Scores a URL or text for misinformation.
pub struct MisinformationTool<C> {
    client: C,
    in_flight: AtomicBool,
}

impl<C: CompletionClient> MisinformationTool<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit `request` and return the outcome.
    ///
    /// Invocation and interpretation failures come back as a placeholder
    /// outcome, never as `Err`.
    pub async fn submit(
        &self,
        request: &AnalysisRequest,
    ) -> Result<Outcome<AnalysisResult>, SubmitError> {
        if request.is_blank() {
            return Err(SubmitError::EmptyInput);
        }
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let prompt = misinformation_prompt(&request.content, request.mode);
        info!(mode = request.mode.as_str(), "submitting misinformation analysis");

        let outcome = match self.client.complete(&prompt).await {
            Ok(raw) => interpret_analysis(&raw, &request.content),
            Err(e) => {
                analysis_fallback(&request.content, OutcomeStatus::TransportError(e.to_string()))
            }
        };
        info!(
            status = outcome.status.kind(),
            score = outcome.result.credibility_score,
            risk = outcome.result.risk_level.as_str(),
            "misinformation analysis finished"
        );
        Ok(outcome)
    }
}

// ── Simplification ──

/// Rewrites legal text in plain English.
pub struct SimplificationTool<C> {
    client: C,
    in_flight: AtomicBool,
}

impl<C: CompletionClient> SimplificationTool<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit `request` and return the outcome.
    pub async fn submit(
        &self,
        request: &SimplificationRequest,
    ) -> Result<Outcome<SimplificationResult>, SubmitError> {
        if request.is_blank() {
            return Err(SubmitError::EmptyInput);
        }
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let prompt = simplification_prompt(&request.legal_text);
        info!(text_len = request.legal_text.len(), "submitting legal simplification");

        let outcome = match self.client.complete(&prompt).await {
            Ok(raw) => interpret_simplification(&raw, &request.legal_text),
            Err(e) => simplification_fallback(
                &request.legal_text,
                OutcomeStatus::TransportError(e.to_string()),
            ),
        };
        info!(
            status = outcome.status.kind(),
            complexity = outcome.result.complexity.as_str(),
            key_terms = outcome.result.key_terms.len(),
            "legal simplification finished"
        );
        Ok(outcome)
    }
}
