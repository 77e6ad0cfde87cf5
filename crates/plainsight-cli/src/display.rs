//! Terminal panels for tool outcomes.
//!
//! Renders an [`Outcome`] as a titled card with labelled rows and indented
//! sections, the same layout for both tools.

use std::fmt::Write;

use plainsight_core::{AnalysisResult, Level, Outcome, SimplificationResult};

const LABEL_WIDTH: usize = 20;
const BAR_CELLS: usize = 20;
/// Marks a placeholder panel. Distinct from every [`Tone`] marker.
const FALLBACK_MARKER: &str = "[fallback]";

/// Colour-free stand-in for the low/medium/high badge colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Caution,
    Danger,
}

impl Tone {
    pub fn of(level: Level) -> Self {
        match level {
            Level::Low => Self::Good,
            Level::Medium => Self::Caution,
            Level::High => Self::Danger,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::Good => "[ok]",
            Self::Caution => "[!]",
            Self::Danger => "[x]",
        }
    }
}

// ── Public API ──

pub fn print_analysis(outcome: &Outcome<AnalysisResult>) {
    print!("{}", render_analysis(outcome));
}

pub fn print_simplification(outcome: &Outcome<SimplificationResult>) {
    print!("{}", render_simplification(outcome));
}

/// Render a misinformation outcome as a card.
pub fn render_analysis(outcome: &Outcome<AnalysisResult>) -> String {
    let r = &outcome.result;
    let tone = Tone::of(r.risk_level);
    let mut out = String::new();

    let _ = writeln!(out, "=== Analysis Results ===");
    push_notice(&mut out, outcome);
    let _ = writeln!(out);

    push_row(
        &mut out,
        "Credibility score",
        &format!("{}/100  {}", r.credibility_score, score_bar(r.credibility_score)),
    );
    push_row(
        &mut out,
        "Risk",
        &format!(
            "{} {} RISK",
            tone.marker(),
            r.risk_level.as_str().to_uppercase()
        ),
    );
    let _ = writeln!(out);

    push_block(&mut out, "Summary", &r.summary);

    if !r.findings.is_empty() {
        let _ = writeln!(out, "Key Findings");
        for (i, finding) in r.findings.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, finding);
        }
        let _ = writeln!(out);
    }

    if !r.sources.is_empty() {
        let _ = writeln!(out, "Verification Sources");
        for source in &r.sources {
            let _ = writeln!(out, "  - {source}");
        }
        let _ = writeln!(out);
    }

    out
}

/// Render a simplification outcome as a card.
pub fn render_simplification(outcome: &Outcome<SimplificationResult>) -> String {
    let r = &outcome.result;
    let tone = Tone::of(r.complexity);
    let (before, after) = r.reading_level.split();
    let mut out = String::new();

    let _ = writeln!(out, "=== Simplified Document ===");
    push_notice(&mut out, outcome);
    let _ = writeln!(out);

    push_row(
        &mut out,
        "Complexity",
        &format!("{} {}", tone.marker(), r.complexity.as_str().to_uppercase()),
    );
    push_row(&mut out, "Reading level", r.reading_level.as_str());
    let _ = writeln!(out);

    push_block(
        &mut out,
        &format!("Original: complex legal language ({})", level_or_unknown(before)),
        &r.original_text,
    );
    push_block(
        &mut out,
        &format!(
            "Simplified: easy to understand ({})",
            level_or_unknown(after.unwrap_or(""))
        ),
        &r.simplified_text,
    );
    push_block(&mut out, "Summary", &r.summary);

    if !r.key_terms.is_empty() {
        let _ = writeln!(out, "Key Terms");
        for term in &r.key_terms {
            let _ = writeln!(out, "  {}", term.term);
            let _ = writeln!(out, "    {}", term.definition);
        }
        let _ = writeln!(out);
    }

    out
}

// ── Helpers ──

fn push_notice<T>(out: &mut String, outcome: &Outcome<T>) {
    if outcome.is_fallback() {
        let _ = writeln!(
            out,
            "{FALLBACK_MARKER} placeholder result ({})",
            outcome.status
        );
    }
}

fn push_row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<width$} {}", label, value, width = LABEL_WIDTH);
}

/// Header line followed by `body` indented two spaces per line.
fn push_block(out: &mut String, header: &str, body: &str) {
    let _ = writeln!(out, "{header}");
    for line in body.lines() {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out);
}

fn level_or_unknown(level: &str) -> &str {
    if level.is_empty() { "unknown" } else { level }
}

/// Fixed-width bar, one `#` per 5 points.
fn score_bar(score: u8) -> String {
    let filled = (score.min(100) as usize * BAR_CELLS) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_CELLS - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plainsight_core::{KeyTerm, OutcomeStatus, ReadingLevel, fallback};

    fn moon_outcome() -> Outcome<AnalysisResult> {
        Outcome {
            result: AnalysisResult {
                credibility_score: 7,
                risk_level: Level::High,
                findings: vec!["Contradicts lunar samples".into(), "Sensational tone".into()],
                sources: vec!["NASA".into()],
                summary: "The claim is false.".into(),
            },
            status: OutcomeStatus::Success,
        }
    }

    fn licence_outcome(reading_level: &str) -> Outcome<SimplificationResult> {
        Outcome {
            result: SimplificationResult {
                original_text: "WHEREAS the Licensor\nowns the rights".into(),
                simplified_text: "- The owner keeps the rights.".into(),
                key_terms: vec![KeyTerm {
                    term: "Licensor".into(),
                    definition: "The person granting permission".into(),
                }],
                summary: "A licence.".into(),
                complexity: Level::Medium,
                reading_level: ReadingLevel::new(reading_level),
            },
            status: OutcomeStatus::Success,
        }
    }

    #[test]
    fn analysis_card_shows_score_and_risk_unchanged() {
        let card = render_analysis(&moon_outcome());
        assert!(card.contains("7/100"));
        assert!(card.contains("[x] HIGH RISK"));
        assert!(card.contains("  1. Contradicts lunar samples"));
        assert!(card.contains("  2. Sensational tone"));
        assert!(card.contains("  - NASA"));
        assert!(!card.contains("placeholder"));
    }

    #[test]
    fn fallback_card_names_the_failure() {
        let outcome = Outcome {
            result: fallback::analysis("x"),
            status: OutcomeStatus::TransportError("server returned 502: bad gateway".into()),
        };
        let card = render_analysis(&outcome);
        assert!(card.contains("[fallback] placeholder result (transport_error: server returned 502"));
        assert!(card.contains("Fallback analysis system"));
    }

    #[test]
    fn medium_risk_panel_is_not_marked_as_fallback() {
        let mut outcome = moon_outcome();
        outcome.result.risk_level = Level::Medium;
        let card = render_analysis(&outcome);
        assert!(card.contains("[!] MEDIUM RISK"));
        assert!(!card.contains(FALLBACK_MARKER));

        let card = render_simplification(&licence_outcome("College → 8th grade"));
        assert!(!card.contains(FALLBACK_MARKER));
    }

    #[test]
    fn fallback_marker_differs_from_every_tone() {
        for tone in [Tone::Good, Tone::Caution, Tone::Danger] {
            assert_ne!(tone.marker(), FALLBACK_MARKER);
        }
    }

    #[test]
    fn score_bar_scales() {
        assert_eq!(score_bar(0), "[....................]");
        assert_eq!(score_bar(50), "[##########..........]");
        assert_eq!(score_bar(100), "[####################]");
        assert_eq!(score_bar(255), "[####################]");
    }

    #[test]
    fn tone_follows_level() {
        assert_eq!(Tone::of(Level::Low), Tone::Good);
        assert_eq!(Tone::of(Level::Medium), Tone::Caution);
        assert_eq!(Tone::of(Level::High).marker(), "[x]");
    }

    #[test]
    fn simplification_card_splits_reading_level() {
        let card = render_simplification(&licence_outcome("College → 8th grade"));
        assert!(card.contains("Original: complex legal language (College)"));
        assert!(card.contains("Simplified: easy to understand (8th grade)"));
        assert!(card.contains("  WHEREAS the Licensor\n  owns the rights\n"));
        assert!(card.contains("  Licensor\n    The person granting permission"));
        assert!(card.contains("[!] MEDIUM"));
    }

    #[test]
    fn reading_level_without_separator_renders_unknown() {
        let card = render_simplification(&licence_outcome("8th grade"));
        assert!(card.contains("Original: complex legal language (8th grade)"));
        assert!(card.contains("Simplified: easy to understand (unknown)"));
    }
}
