//! service-core: Shared infrastructure for the ContractGuard services.
pub mod config;
pub mod error;
pub mod observability;
pub mod risk;

pub use axum;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
