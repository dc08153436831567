use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default deadline for the external model call, in seconds.
const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub model: ModelConfig,
    pub notification: NotificationConfig,
    pub settings: SettingsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Which text-model backend to use.
    pub provider: ModelProvider,
    /// API key for the hosted provider. Required in production.
    pub api_key: String,
    /// Model identifier (e.g., gpt-4o).
    pub model: String,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Deadline for a single generation call.
    pub timeout_secs: u64,
    /// Canned reply for the mock provider.
    pub mock_reply: Option<String>,
}

/// Text-model backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Openai,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    pub from_name: String,
    pub from_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingsConfig {
    /// Path of the JSON file backing the settings entity.
    pub path: String,
}

impl AnalysisConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = common_config.is_prod();

        Ok(AnalysisConfig {
            common: common_config,
            model: ModelConfig {
                provider: match get_env("MODEL_PROVIDER", Some("openai"), is_prod)?.as_str() {
                    "mock" => ModelProvider::Mock,
                    _ => ModelProvider::Openai,
                },
                api_key: get_env("OPENAI_API_KEY", Some(""), is_prod)?,
                model: get_env("OPENAI_MODEL", Some("gpt-4o"), is_prod)?,
                base_url: get_env(
                    "OPENAI_BASE_URL",
                    Some("https://api.openai.com/v1"),
                    is_prod,
                )?,
                timeout_secs: get_env(
                    "MODEL_TIMEOUT_SECS",
                    Some(&DEFAULT_MODEL_TIMEOUT_SECS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MODEL_TIMEOUT_SECS),
                mock_reply: env::var("MODEL_MOCK_REPLY").ok(),
            },
            notification: NotificationConfig {
                from_name: get_env(
                    "NOTIFY_FROM_NAME",
                    Some("ContractGuard AI Analysis System"),
                    is_prod,
                )?,
                from_email: get_env(
                    "NOTIFY_FROM_EMAIL",
                    Some("reports@contractguard.local"),
                    is_prod,
                )?,
            },
            settings: SettingsConfig {
                path: get_env("SETTINGS_PATH", Some("settings.json"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
