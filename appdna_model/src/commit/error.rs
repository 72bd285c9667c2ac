//! Error types for batch commits

use crate::model::ModelError;

/// Result type for commit operations
pub type CommitResult<T> = Result<T, CommitError>;

/// Errors raised while committing staged declarations
#[derive(Debug, Clone, thiserror::Error)]
pub enum CommitError {
    #[error("Nothing to commit: the batch contains no valid declarations")]
    EmptyBatch,

    #[error("The model is not available: {reason}")]
    ModelUnavailable { reason: String },

    #[error("The model rejected the batch: {0}")]
    Rejected(#[from] ModelError),
}

impl CommitError {
    pub fn model_unavailable(reason: &str) -> Self {
        Self::ModelUnavailable {
            reason: reason.to_string(),
        }
    }

    /// Get error code for the global logging system
    pub fn error_code(&self) -> crate::logging::codes::Code {
        use crate::logging::codes;
        match self {
            Self::EmptyBatch => codes::parsing::EMPTY_BATCH,
            Self::ModelUnavailable { .. } => codes::commit::MODEL_UNAVAILABLE,
            Self::Rejected(_) => codes::commit::COMMIT_REJECTED,
        }
    }
}
