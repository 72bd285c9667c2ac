//! Error type for the bulk ingestion pipeline
//!
//! Per-line failures never surface here; they become `ValidationResult`
//! entries. Only batch-level and commit-time failures cross this boundary.

use crate::commit::CommitError;
use crate::model::ModelError;
use crate::parser::ParseError;

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Batch-level pipeline failures
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Batch could not be parsed: {0}")]
    Parse(#[from] ParseError),

    #[error("Batch could not be committed: {0}")]
    Commit(#[from] CommitError),

    #[error("Model operation failed: {0}")]
    Model(#[from] ModelError),

    #[error("Pipeline self-check failed: {message}")]
    SelfCheck { message: String },
}

impl PipelineError {
    pub fn self_check(message: &str) -> Self {
        Self::SelfCheck {
            message: message.to_string(),
        }
    }

    /// Get error code for the global logging system
    pub fn error_code(&self) -> crate::logging::codes::Code {
        match self {
            Self::Parse(inner) => inner.error_code(),
            Self::Commit(inner) => inner.error_code(),
            Self::Model(inner) => inner.error_code(),
            Self::SelfCheck { .. } => crate::logging::codes::system::INITIALIZATION_FAILURE,
        }
    }
}
