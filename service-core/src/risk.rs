//! Risk severity classification shared by every display surface.
//!
//! The dashboard, history list, and submission client all color risk scores
//! with the same thresholds. This is the single place those thresholds live.

use serde::{Deserialize, Serialize};

/// Severity bucket for a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

impl RiskSeverity {
    /// Human-readable label as shown on badges.
    pub fn label(&self) -> &'static str {
        match self {
            RiskSeverity::Low => "Low Risk",
            RiskSeverity::Medium => "Medium Risk",
            RiskSeverity::High => "High Risk",
        }
    }
}

/// Classify a risk score into a severity bucket.
///
/// Scores above 70 are high, above 40 medium, anything else low.
pub fn classify(score: u8) -> RiskSeverity {
    if score > 70 {
        RiskSeverity::High
    } else if score > 40 {
        RiskSeverity::Medium
    } else {
        RiskSeverity::Low
    }
}
