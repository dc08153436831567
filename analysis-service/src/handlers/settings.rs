use crate::services::AnalysisSettings;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;
use validator::Validate;

pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.settings.get().await))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<AnalysisSettings>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    state.settings.update(payload.clone()).await?;

    Ok(Json(payload))
}
