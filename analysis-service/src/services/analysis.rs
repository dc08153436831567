//! Prompt construction and risk-score extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed instruction given to the model for every analysis.
pub const SYSTEM_INSTRUCTION: &str = "You are a legal contract analysis AI. Analyze the provided contract and identify:
1. Liability clauses and risk exposure
2. Insurance requirements and gaps
3. Termination conditions and penalties
4. Contract duration and renewal terms
5. Other potential legal concerns

Provide a risk score from 1-100 and detailed findings with recommendations.";

/// Score used when the reply carries no recognizable risk score.
pub const DEFAULT_RISK_SCORE: u8 = 50;

/// Case-insensitive "risk score" followed by an integer, with or without
/// a colon.
static RISK_SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)risk score:?\s*(\d+)").expect("invalid risk score pattern"));

/// Build the per-request user prompt from the decoded document text and the
/// requester's optional notes.
pub fn build_prompt(document_text: &str, notes: Option<&str>) -> String {
    let notes = match notes {
        Some(n) if !n.trim().is_empty() => n,
        _ => "None",
    };
    format!(
        "Analyze this contract document:\n\n{}\n\nRequester notes: {}",
        document_text, notes
    )
}

/// Scan the model's reply for a risk score.
///
/// The first match wins. Values above 100 are clamped to 100 so the result
/// stays within the declared [0,100] range; an unparseable number falls back
/// to the default.
pub fn extract_risk_score(analysis: &str) -> u8 {
    RISK_SCORE_RE
        .captures(analysis)
        .map(|caps| {
            // The capture is all digits, so a parse failure can only be
            // overflow; clamp it like any other out-of-range match.
            caps[1]
                .parse::<u64>()
                .map(|score| score.min(100) as u8)
                .unwrap_or(100)
        })
        .unwrap_or(DEFAULT_RISK_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_score_with_colon() {
        let reply = "Several concerns were found.\n\nRisk score: 76\n\nRecommendations follow.";
        assert_eq!(extract_risk_score(reply), 76);
    }

    #[test]
    fn extracts_score_without_colon() {
        assert_eq!(extract_risk_score("Overall risk score 82 out of 100."), 82);
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(extract_risk_score("RISK SCORE: 12"), 12);
    }

    #[test]
    fn first_match_wins() {
        let reply = "Risk score: 30. A revised risk score: 90 after mitigation.";
        assert_eq!(extract_risk_score(reply), 30);
    }

    #[test]
    fn defaults_when_pattern_absent() {
        let reply = "This NDA presents moderate risk with generally standard terms.";
        assert_eq!(extract_risk_score(reply), DEFAULT_RISK_SCORE);
    }

    #[test]
    fn clamps_out_of_range_scores() {
        assert_eq!(extract_risk_score("risk score: 250"), 100);
    }

    #[test]
    fn clamps_scores_too_large_to_parse() {
        assert_eq!(
            extract_risk_score("risk score: 99999999999999999999"),
            100
        );
    }

    #[test]
    fn prompt_includes_notes_when_present() {
        let prompt = build_prompt("Confidential terms...", Some("Focus on liability"));
        assert!(prompt.starts_with("Analyze this contract document:"));
        assert!(prompt.ends_with("Requester notes: Focus on liability"));
    }

    #[test]
    fn prompt_uses_none_for_missing_or_blank_notes() {
        assert!(build_prompt("text", None).ends_with("Requester notes: None"));
        assert!(build_prompt("text", Some("  ")).ends_with("Requester notes: None"));
    }
}
