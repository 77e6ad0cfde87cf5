//! Report export: the outcome written to disk as JSON or Markdown.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use plainsight_core::{AnalysisResult, Outcome, SimplificationResult};
use serde::Serialize;

/// A result type that can be exported.
pub trait ReportBody: Serialize {
    const TOOL: &'static str;

    fn write_markdown(&self, out: &mut String);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a, T> {
    tool: &'static str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    generated_at: String,
    result: &'a T,
}

/// Pretty JSON document for `outcome`.
pub fn to_json<T: ReportBody>(
    outcome: &Outcome<T>,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<String> {
    let report = Report {
        tool: T::TOOL,
        status: outcome.status.kind(),
        detail: outcome.status.detail(),
        generated_at: generated_at.to_rfc3339(),
        result: &outcome.result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Markdown document for `outcome`.
pub fn to_markdown<T: ReportBody>(outcome: &Outcome<T>, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Plainsight {} report", T::TOOL);
    let _ = writeln!(out);
    let _ = writeln!(out, "- Generated: {}", generated_at.to_rfc3339());
    let _ = writeln!(out, "- Status: {}", outcome.status.kind());
    if let Some(detail) = outcome.status.detail() {
        let _ = writeln!(out, "- Detail: {detail}");
    }
    let _ = writeln!(out);
    outcome.result.write_markdown(&mut out);
    out
}

/// Write `outcome` to `path`: Markdown for `.md`, JSON otherwise.
pub fn write<T: ReportBody>(path: &Path, outcome: &Outcome<T>) -> anyhow::Result<()> {
    let now = Utc::now();
    let is_markdown = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    let body = if is_markdown {
        to_markdown(outcome, now)
    } else {
        to_json(outcome, now)?
    };
    std::fs::write(path, body).with_context(|| format!("writing report {}", path.display()))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

impl ReportBody for AnalysisResult {
    const TOOL: &'static str = "misinformation";

    fn write_markdown(&self, out: &mut String) {
        let _ = writeln!(out, "**Credibility score:** {}/100  ", self.credibility_score);
        let _ = writeln!(out, "**Risk level:** {}", self.risk_level.as_str());
        let _ = writeln!(out);
        let _ = writeln!(out, "## Summary\n\n{}\n", self.summary);
        let _ = writeln!(out, "## Key findings\n");
        for finding in &self.findings {
            let _ = writeln!(out, "- {finding}");
        }
        let _ = writeln!(out, "\n## Verification sources\n");
        for source in &self.sources {
            let _ = writeln!(out, "- {source}");
        }
    }
}

impl ReportBody for SimplificationResult {
    const TOOL: &'static str = "simplification";

    fn write_markdown(&self, out: &mut String) {
        let _ = writeln!(out, "**Complexity:** {}  ", self.complexity.as_str());
        let _ = writeln!(out, "**Reading level:** {}", self.reading_level.as_str());
        let _ = writeln!(out);
        let _ = writeln!(out, "## Summary\n\n{}\n", self.summary);
        let _ = writeln!(out, "## Simplified text\n\n{}\n", self.simplified_text);
        let _ = writeln!(out, "## Key terms\n");
        for term in &self.key_terms {
            let _ = writeln!(out, "- **{}**: {}", term.term, term.definition);
        }
        let _ = writeln!(out, "\n## Original text\n");
        for line in self.original_text.lines() {
            let _ = writeln!(out, "> {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use plainsight_core::{Level, OutcomeStatus, fallback};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    fn analysis_outcome() -> Outcome<AnalysisResult> {
        Outcome {
            result: AnalysisResult {
                credibility_score: 81,
                risk_level: Level::Low,
                findings: vec!["Quotes are attributed".into()],
                sources: vec!["Reuters".into()],
                summary: "Likely accurate.".into(),
            },
            status: OutcomeStatus::Success,
        }
    }

    #[test]
    fn json_report_uses_result_schema() {
        let json = to_json(&analysis_outcome(), fixed_time()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tool"], "misinformation");
        assert_eq!(value["status"], "success");
        assert!(value.get("detail").is_none());
        assert_eq!(value["generatedAt"], "2026-10-18T09:30:00+00:00");
        assert_eq!(value["result"]["credibilityScore"], 81);
        assert_eq!(value["result"]["riskLevel"], "low");
    }

    #[test]
    fn json_report_carries_failure_detail() {
        let outcome = Outcome {
            result: fallback::simplification("WHEREAS"),
            status: OutcomeStatus::ParseError("expected value at line 1 column 1".into()),
        };
        let json = to_json(&outcome, fixed_time()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tool"], "simplification");
        assert_eq!(value["status"], "parse_error");
        assert_eq!(value["detail"], "expected value at line 1 column 1");
        assert_eq!(value["result"]["originalText"], "WHEREAS");
        assert_eq!(value["result"]["complexity"], "high");
    }

    #[test]
    fn markdown_report_lists_sections() {
        let md = to_markdown(&analysis_outcome(), fixed_time());
        assert!(md.starts_with("# Plainsight misinformation report\n"));
        assert!(md.contains("**Credibility score:** 81/100"));
        assert!(md.contains("## Key findings\n\n- Quotes are attributed"));
        assert!(md.contains("- Reuters"));
    }

    #[test]
    fn write_picks_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let md_path = dir.path().join("report.MD");
        let json_path = dir.path().join("report.json");

        write(&md_path, &analysis_outcome()).unwrap();
        write(&json_path, &analysis_outcome()).unwrap();

        let md = std::fs::read_to_string(&md_path).unwrap();
        assert!(md.starts_with("# Plainsight"));
        let json = std::fs::read_to_string(&json_path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
    }

    #[test]
    fn write_into_missing_directory_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.json");
        let err = write(&path, &analysis_outcome()).unwrap_err();
        assert!(err.to_string().starts_with("writing report"));
    }
}
