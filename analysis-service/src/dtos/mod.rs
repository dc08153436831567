pub mod analysis;

pub use analysis::AnalyzeResponse;
