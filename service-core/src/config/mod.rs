use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Process-level settings shared by every ContractGuard service.
///
/// Loaded from an optional `contractguard` file plus `CONTRACTGUARD__`
/// environment overrides. Service-specific sections (model provider,
/// notification, settings path) layer on top of this in each service's own
/// config module.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment. In `prod`, secrets with no safe default
    /// (such as the model API key) become mandatory.
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_port() -> u16 {
    8088
}

fn default_environment() -> String {
    "dev".to_string()
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("contractguard").required(false))
            .add_source(config::Environment::with_prefix("CONTRACTGUARD").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn is_prod(&self) -> bool {
        self.environment == "prod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let config: Config = serde_json::from_str("{}").expect("defaults should deserialize");
        assert_eq!(config.port, 8088);
        assert_eq!(config.environment, "dev");
        assert!(!config.is_prod());
    }

    #[test]
    fn prod_environment_is_recognized() {
        let config: Config =
            serde_json::from_str(r#"{"environment": "prod"}"#).expect("should deserialize");
        assert!(config.is_prod());
    }
}
