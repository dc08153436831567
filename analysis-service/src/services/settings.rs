//! Settings entity and its persistence boundary.
//!
//! Analysis preferences were previously implied-durable UI state; here they
//! are an explicit entity backed by a JSON file, loaded once at startup and
//! rewritten on every update.

use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

/// Analysis and report-delivery preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisSettings {
    /// Subject template. Supports [document_name], [requester_name],
    /// [risk_score], and [date] placeholders.
    #[validate(length(min = 1))]
    pub email_subject: String,
    pub email_signature: String,
    pub include_risk_score: bool,
    pub include_recommendations: bool,
    pub auto_send_email: bool,
    #[validate(range(min = 0, max = 100))]
    pub high_risk_threshold: u8,
    pub detailed_analysis: bool,
    pub legal_disclaimer: bool,
    pub email_on_complete: bool,
    pub email_on_high_risk: bool,
    pub weekly_summary: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            email_subject: "Contract Risk Analysis Complete - [document_name]".to_string(),
            email_signature: "Best regards,\nContractGuard AI Analysis System".to_string(),
            include_risk_score: true,
            include_recommendations: true,
            auto_send_email: true,
            high_risk_threshold: 75,
            detailed_analysis: true,
            legal_disclaimer: false,
            email_on_complete: true,
            email_on_high_risk: true,
            weekly_summary: false,
        }
    }
}

/// File-backed settings store with an in-memory cache.
#[derive(Clone)]
pub struct SettingsStore {
    path: PathBuf,
    cache: Arc<RwLock<AnalysisSettings>>,
}

impl SettingsStore {
    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist yet.
    pub async fn load(path: &str) -> Result<Self, AppError> {
        let path = PathBuf::from(path);

        let settings = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "Invalid settings file {}: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No settings file; using defaults");
                AnalysisSettings::default()
            }
            Err(e) => return Err(AppError::from(e)),
        };

        Ok(Self {
            path,
            cache: Arc::new(RwLock::new(settings)),
        })
    }

    pub async fn get(&self) -> AnalysisSettings {
        self.cache.read().await.clone()
    }

    /// Persist new settings and refresh the cache.
    pub async fn update(&self, settings: AnalysisSettings) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(&settings)
            .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, json).await?;

        *self.cache.write().await = settings;

        tracing::info!(path = %self.path.display(), "Settings updated");
        Ok(())
    }
}
