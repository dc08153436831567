pub mod analysis;
pub mod metrics;
pub mod notifier;
pub mod providers;
pub mod settings;

pub use metrics::{get_metrics, init_metrics};
pub use notifier::{AnalysisReport, CountingNotifier, LogNotifier, Notifier};
pub use settings::{AnalysisSettings, SettingsStore};
