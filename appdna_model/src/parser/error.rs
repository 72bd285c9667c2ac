//! Error types for declaration parsing

/// Per-line and batch-level parse failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Line must match \"<Name> is a child of <Parent>\" or \"<Name> is a lookup\"")]
    UnrecognizedDeclaration { raw_line: String },

    #[error("Batch contains {count} declaration lines (max: {max})")]
    BatchTooLarge { count: usize, max: usize },

    #[error("Batch input is {size} bytes (max: {max})")]
    InputTooLarge { size: usize, max: usize },
}

impl ParseError {
    pub fn unrecognized(raw_line: &str) -> Self {
        Self::UnrecognizedDeclaration {
            raw_line: raw_line.to_string(),
        }
    }

    /// Get error code for the global logging system
    pub fn error_code(&self) -> crate::logging::codes::Code {
        use crate::logging::codes;
        match self {
            Self::UnrecognizedDeclaration { .. } => codes::parsing::UNRECOGNIZED_DECLARATION,
            Self::BatchTooLarge { .. } => codes::parsing::BATCH_TOO_LARGE,
            Self::InputTooLarge { .. } => codes::parsing::INPUT_TOO_LARGE,
        }
    }
}
