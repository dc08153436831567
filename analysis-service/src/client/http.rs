//! HTTP client for the analysis endpoint.
//!
//! One submission is one best-effort round trip: no retries, no
//! cancellation, no deduplication.

use crate::dtos::AnalyzeResponse;
use reqwest::multipart;
use serde::Deserialize;
use thiserror::Error;

/// Fallback shown when the service's error body cannot be read.
const GENERIC_FAILURE: &str = "Failed to analyze contract";

#[derive(Error, Debug)]
pub enum ClientError {
    /// The service rejected the submission; carries its error message.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// One analysis submission, as dispatched over the wire.
#[derive(Debug, Clone)]
pub struct Submission {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
    pub requester_name: String,
    pub requester_email: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the analysis-service submission endpoint.
pub struct AnalysisClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Submit a document for analysis and wait for the result.
    pub async fn analyze(&self, submission: &Submission) -> Result<AnalyzeResponse, ClientError> {
        let mut form = multipart::Form::new()
            .part(
                "file",
                multipart::Part::bytes(submission.file_bytes.clone())
                    .file_name(submission.file_name.clone()),
            )
            .text("requesterName", submission.requester_name.clone())
            .text("requesterEmail", submission.requester_email.clone());

        if let Some(notes) = &submission.notes {
            form = form.text("notes", notes.clone());
        }

        let response = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.status().is_success() {
            response
                .json::<AnalyzeResponse>()
                .await
                .map_err(|e| ClientError::Network(format!("Invalid response body: {}", e)))
        } else {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| GENERIC_FAILURE.to_string());
            Err(ClientError::Rejected(message))
        }
    }
}
