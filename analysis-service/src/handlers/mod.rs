pub mod analyze;
pub mod health;
pub mod settings;

pub use analyze::analyze_contract;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use settings::{get_settings, update_settings};
