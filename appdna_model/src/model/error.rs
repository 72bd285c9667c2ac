//! Error types for the model store

/// Result type for model store operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by the model store
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    #[error("Object '{name}' already exists in the model")]
    DuplicateObjectName { name: String },

    #[error("Staged batch contains duplicate object name '{name}'")]
    DuplicateInCommand { name: String },

    #[error("Cannot read or write model document: {message}")]
    Io { message: String },

    #[error("Model document is not valid JSON: {message}")]
    Parse { message: String },
}

impl ModelError {
    pub fn duplicate_object_name(name: &str) -> Self {
        Self::DuplicateObjectName {
            name: name.to_string(),
        }
    }

    pub fn duplicate_in_command(name: &str) -> Self {
        Self::DuplicateInCommand {
            name: name.to_string(),
        }
    }

    /// Get error code for the global logging system
    pub fn error_code(&self) -> crate::logging::codes::Code {
        use crate::logging::codes;
        match self {
            Self::DuplicateObjectName { .. } | Self::DuplicateInCommand { .. } => {
                codes::model::DUPLICATE_OBJECT_NAME
            }
            Self::Io { .. } => codes::model::MODEL_IO_ERROR,
            Self::Parse { .. } => codes::model::MODEL_PARSE_ERROR,
        }
    }
}
