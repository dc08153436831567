//! Submission form state.
//!
//! Mirrors the upload form's behavior: submission stays disabled until a
//! file is selected and the required requester fields are filled, and only
//! one request may be in flight at a time. This validation is a client
//! courtesy; the service only enforces file presence.

use service_core::risk::RiskSeverity;
use validator::ValidateEmail;

/// A file picked for analysis.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Display state of the single outstanding request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Busy indicator; purely client-side, the service has no such state.
    Submitting,
    Completed {
        risk_score: u8,
        severity: RiskSeverity,
    },
    Failed(String),
}

/// Collects the inputs for one analysis submission.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub file: Option<SelectedFile>,
    pub requester_name: String,
    pub requester_email: String,
    pub notes: String,
    phase: SubmissionPhase,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.file = Some(SelectedFile {
            name: name.into(),
            bytes,
        });
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        let has_file = self
            .file
            .as_ref()
            .map(|f| !f.bytes.is_empty())
            .unwrap_or(false);

        has_file
            && !self.requester_name.trim().is_empty()
            && self.requester_email.validate_email()
            && self.phase != SubmissionPhase::Submitting
    }

    /// Transition to the busy state. Returns false if submission is not
    /// currently allowed.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = SubmissionPhase::Submitting;
        true
    }

    pub fn complete(&mut self, risk_score: u8) {
        self.phase = SubmissionPhase::Completed {
            risk_score,
            severity: service_core::risk::classify(risk_score),
        };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = SubmissionPhase::Failed(message.into());
    }
}
