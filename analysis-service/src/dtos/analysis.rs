use serde::{Deserialize, Serialize};

/// Success payload of `POST /api/analyze`.
///
/// `fileName`, `requester`, and `email` echo the submitted values
/// unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    /// Free-form analysis text, exactly as produced by the model.
    pub analysis: String,
    /// Risk score in [0,100]; 50 when the model reply carried none.
    pub risk_score: u8,
    pub file_name: String,
    pub requester: String,
    pub email: String,
}
