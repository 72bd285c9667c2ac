//! Error types for the panel host layer

/// Result type for host operations
pub type HostResult<T> = Result<T, HostError>;

/// Errors raised by the panel host
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("No open panel for key '{key}'")]
    PanelNotFound { key: String },

    #[error("Panel '{key}' has been disposed")]
    PanelDisposed { key: String },

    #[error("The model store is not available: {reason}")]
    ModelUnavailable { reason: String },
}

impl HostError {
    pub fn panel_not_found(key: &str) -> Self {
        Self::PanelNotFound {
            key: key.to_string(),
        }
    }

    pub fn panel_disposed(key: &str) -> Self {
        Self::PanelDisposed {
            key: key.to_string(),
        }
    }

    pub fn model_unavailable(reason: &str) -> Self {
        Self::ModelUnavailable {
            reason: reason.to_string(),
        }
    }
}
