//! Crate error type
//!
//! Record validation, configuration and reporting failures all surface as
//! [`AnalysisError`].

use thiserror::Error;

use crate::pipeline::validation::ValidationReport;

/// Error type for record validation, configuration and reporting failures.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("record {index} repeats speaker '{speaker}'")]
    DuplicateSpeaker { index: usize, speaker: String },
    #[error("culture group '{0}' not found")]
    GroupNotFound(String),
    #[error("top_n must be a positive integer, got {0}")]
    InvalidTopN(usize),
    #[error("invalid analysis spec: {}", summarize(.0))]
    InvalidSpec(ValidationReport),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn summarize(report: &ValidationReport) -> String {
    report
        .errors()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
