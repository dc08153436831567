//! Submission client: form state, the HTTP round trip, and navigation
//! helpers for an embedding frontend.

pub mod form;
pub mod http;
pub mod nav;

pub use form::{SelectedFile, SubmissionForm, SubmissionPhase};
pub use http::{AnalysisClient, ClientError, Submission};
