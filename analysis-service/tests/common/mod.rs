use analysis_service::config::{
    AnalysisConfig, ModelConfig, ModelProvider, NotificationConfig, SettingsConfig,
};
use analysis_service::services::providers::TextModel;
use analysis_service::services::Notifier;
use analysis_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use uuid::Uuid;

pub const DEFAULT_MOCK_REPLY: &str = "This service agreement presents several high-risk \
elements that require immediate attention before signing. Risk score: 76. \
Recommendations follow.";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub settings_path: String,
}

pub fn test_config(mock_reply: &str) -> AnalysisConfig {
    AnalysisConfig {
        common: CoreConfig {
            port: 0,
            environment: "test".to_string(),
        },
        model: ModelConfig {
            provider: ModelProvider::Mock,
            api_key: String::new(),
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 5,
            mock_reply: Some(mock_reply.to_string()),
        },
        notification: NotificationConfig {
            from_name: "ContractGuard AI Analysis System".to_string(),
            from_email: "reports@contractguard.local".to_string(),
        },
        settings: SettingsConfig {
            path: format!("target/test-settings-{}.json", Uuid::new_v4()),
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_reply(DEFAULT_MOCK_REPLY).await
    }

    /// Spawn with the mock provider returning the given reply.
    pub async fn spawn_with_reply(reply: &str) -> Self {
        let config = test_config(reply);

        let app = Application::build(config.clone())
            .await
            .expect("Failed to build test application");

        Self::start(app, config).await
    }

    /// Spawn with explicit collaborators.
    pub async fn spawn_with(model: Arc<dyn TextModel>, notifier: Arc<dyn Notifier>) -> Self {
        let config = test_config(DEFAULT_MOCK_REPLY);

        let app = Application::build_with(config.clone(), model, notifier)
            .await
            .expect("Failed to build test application");

        Self::start(app, config).await
    }

    async fn start(app: Application, config: AnalysisConfig) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            settings_path: config.settings.path,
        }
    }

    /// Cleanup test resources.
    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_file(&self.settings_path).await;
    }
}
