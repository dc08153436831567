//! Report notification seam.
//!
//! Email delivery is stubbed: the real contract (deliver a formatted report
//! to the requester) belongs to an external collaborator. `LogNotifier`
//! renders the report and logs the would-be delivery.

use crate::config::NotificationConfig;
use crate::services::settings::AnalysisSettings;
use async_trait::async_trait;
use service_core::risk;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to render report: {0}")]
    Render(String),
}

/// One analysis report, ready for delivery.
pub struct AnalysisReport<'a> {
    pub file_name: &'a str,
    pub requester_name: &'a str,
    pub requester_email: &'a str,
    pub risk_score: u8,
    pub analysis: &'a str,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_report(
        &self,
        report: &AnalysisReport<'_>,
        settings: &AnalysisSettings,
    ) -> Result<(), NotifyError>;
}

/// Render an email subject from the settings template.
///
/// Supported placeholders: [document_name], [requester_name], [risk_score],
/// [date].
pub fn render_subject(template: &str, report: &AnalysisReport<'_>) -> String {
    template
        .replace("[document_name]", report.file_name)
        .replace("[requester_name]", report.requester_name)
        .replace("[risk_score]", &report.risk_score.to_string())
        .replace("[date]", &chrono::Utc::now().format("%Y-%m-%d").to_string())
}

/// Log-only notifier.
pub struct LogNotifier {
    config: NotificationConfig,
}

impl LogNotifier {
    pub fn new(config: NotificationConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_report(
        &self,
        report: &AnalysisReport<'_>,
        settings: &AnalysisSettings,
    ) -> Result<(), NotifyError> {
        let subject = render_subject(&settings.email_subject, report);
        let severity = risk::classify(report.risk_score);

        tracing::info!(
            from = %format!("{} <{}>", self.config.from_name, self.config.from_email),
            to = %report.requester_email,
            subject = %subject,
            risk_score = report.risk_score,
            severity = severity.label(),
            include_risk_score = settings.include_risk_score,
            include_recommendations = settings.include_recommendations,
            "Email delivery is stubbed; analysis report logged only"
        );

        Ok(())
    }
}

/// Counting notifier for tests.
pub struct CountingNotifier {
    sent: AtomicU64,
}

impl CountingNotifier {
    pub fn new() -> Self {
        Self {
            sent: AtomicU64::new(0),
        }
    }

    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::SeqCst)
    }
}

impl Default for CountingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for CountingNotifier {
    async fn send_report(
        &self,
        report: &AnalysisReport<'_>,
        _settings: &AnalysisSettings,
    ) -> Result<(), NotifyError> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        tracing::info!(to = %report.requester_email, "[MOCK] Report would be sent");
        Ok(())
    }
}
