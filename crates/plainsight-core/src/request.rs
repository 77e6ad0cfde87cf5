//! Submissions captured from the user for a single interaction.

use serde::{Deserialize, Serialize};

/// How the misinformation tool should describe the submitted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    Url,
    Text,
}

impl ContentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
        }
    }

    /// Phrase used inside the prompt to name the content.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::Url => "URL content",
            Self::Text => "text",
        }
    }
}

/// A misinformation-scoring submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub content: String,
    pub mode: ContentMode,
}

impl AnalysisRequest {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            content: url.into(),
            mode: ContentMode::Url,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            mode: ContentMode::Text,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// A legal-text simplification submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplificationRequest {
    pub legal_text: String,
}

impl SimplificationRequest {
    pub fn new(legal_text: impl Into<String>) -> Self {
        Self {
            legal_text: legal_text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.legal_text.trim().is_empty()
    }
}
