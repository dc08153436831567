use crate::dtos::AnalyzeResponse;
use crate::services::analysis::{build_prompt, extract_risk_score, SYSTEM_INSTRUCTION};
use crate::services::providers::ModelError;
use crate::services::AnalysisReport;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use service_core::risk;

/// Upload size cap; the client advertises "up to 10MB".
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Fields collected from the multipart submission.
#[derive(Default)]
struct Submission {
    file: Option<(String, Vec<u8>)>,
    requester_name: String,
    requester_email: String,
    notes: Option<String>,
}

async fn read_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("unnamed").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e))
                    })?
                    .to_vec();

                if data.len() > MAX_UPLOAD_BYTES {
                    return Err(AppError::BadRequest(anyhow::anyhow!(
                        "File too large (max 10MB)"
                    )));
                }

                submission.file = Some((file_name, data));
            }
            Some("requesterName") => {
                submission.requester_name = field.text().await.map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!("Failed to read requesterName: {}", e))
                })?;
            }
            Some("requesterEmail") => {
                submission.requester_email = field.text().await.map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!("Failed to read requesterEmail: {}", e))
                })?;
            }
            Some("notes") => {
                submission.notes = Some(field.text().await.map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!("Failed to read notes: {}", e))
                })?);
            }
            _ => {}
        }
    }

    Ok(submission)
}

/// Analyze an uploaded contract document.
///
/// The file's bytes are decoded as text verbatim; there is no
/// format-specific extraction, so a binary PDF or Word file is treated as
/// raw text. Known, accepted limitation.
pub async fn analyze_contract(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let submission = read_submission(multipart).await?;

    let (file_name, data) = submission
        .file
        .filter(|(_, data)| !data.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("No file provided")))?;

    metrics::counter!("analysis_requests_total").increment(1);

    tracing::info!(
        file_name = %file_name,
        size = data.len(),
        requester = %submission.requester_name,
        "Contract analysis started"
    );

    let document_text = String::from_utf8_lossy(&data);
    let prompt = build_prompt(&document_text, submission.notes.as_deref());

    let reply = match state.model.generate(SYSTEM_INSTRUCTION, &prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            metrics::counter!("analysis_failures_total").increment(1);
            return Err(match e {
                ModelError::Timeout => AppError::AnalysisTimeout,
                other => AppError::AnalysisFailed(anyhow::Error::new(other)),
            });
        }
    };

    let risk_score = extract_risk_score(&reply.text);
    metrics::histogram!("analysis_risk_score").record(risk_score as f64);

    let settings = state.settings.get().await;
    if settings.auto_send_email {
        let report = AnalysisReport {
            file_name: &file_name,
            requester_name: &submission.requester_name,
            requester_email: &submission.requester_email,
            risk_score,
            analysis: &reply.text,
        };

        // Delivery is stubbed; a failed stub must not fail the analysis.
        if let Err(e) = state.notifier.send_report(&report, &settings).await {
            tracing::warn!(error = %e, "Notification stub failed");
        }
    }

    tracing::info!(
        file_name = %file_name,
        risk_score,
        severity = risk::classify(risk_score).label(),
        input_tokens = reply.input_tokens,
        output_tokens = reply.output_tokens,
        "Contract analysis completed"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis: reply.text,
        risk_score,
        file_name,
        requester: submission.requester_name,
        email: submission.requester_email,
    }))
}
