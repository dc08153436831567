//! Application startup and lifecycle management.
//!
//! Wires configuration to concrete collaborators (model provider, notifier,
//! settings store), binds the listener (port 0 = random port for testing),
//! and serves the HTTP API.

use crate::config::{AnalysisConfig, ModelProvider};
use crate::handlers::{
    analyze_contract, get_settings, health_check, metrics_endpoint, readiness_check,
    update_settings,
};
use crate::services::providers::mock::MockTextModel;
use crate::services::providers::openai::{OpenAiConfig, OpenAiTextModel};
use crate::services::providers::TextModel;
use crate::services::{LogNotifier, Notifier, SettingsStore};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Default canned reply when the mock provider is selected without one.
const DEFAULT_MOCK_REPLY: &str =
    "Mock analysis: no material concerns identified. Risk score: 50";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AnalysisConfig,
    pub model: Arc<dyn TextModel>,
    pub notifier: Arc<dyn Notifier>,
    pub settings: SettingsStore,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with collaborators chosen from configuration.
    pub async fn build(config: AnalysisConfig) -> Result<Self, AppError> {
        let model: Arc<dyn TextModel> = match config.model.provider {
            ModelProvider::Openai => {
                tracing::info!(
                    model = %config.model.model,
                    base_url = %config.model.base_url,
                    "Initialized OpenAI-compatible text provider"
                );
                Arc::new(OpenAiTextModel::new(OpenAiConfig {
                    api_key: config.model.api_key.clone(),
                    model: config.model.model.clone(),
                    base_url: config.model.base_url.clone(),
                    timeout_secs: config.model.timeout_secs,
                }))
            }
            ModelProvider::Mock => {
                tracing::info!("Initialized mock text provider");
                Arc::new(MockTextModel::new(
                    config
                        .model
                        .mock_reply
                        .clone()
                        .unwrap_or_else(|| DEFAULT_MOCK_REPLY.to_string()),
                ))
            }
        };

        let notifier: Arc<dyn Notifier> =
            Arc::new(LogNotifier::new(config.notification.clone()));

        Self::build_with(config, model, notifier).await
    }

    /// Build with explicit collaborators. Used by tests to inject mocks.
    pub async fn build_with(
        config: AnalysisConfig,
        model: Arc<dyn TextModel>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppError> {
        let settings = SettingsStore::load(&config.settings.path).await?;

        let state = AppState {
            config: config.clone(),
            model,
            notifier,
            settings,
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Analysis service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/analyze", post(analyze_contract))
        .route("/api/settings", get(get_settings).put(update_settings))
        // Multipart framing overhead on top of the file cap.
        .layer(DefaultBodyLimit::max(
            crate::handlers::analyze::MAX_UPLOAD_BYTES + 64 * 1024,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
