//! Error types for declaration validation
//!
//! Validation failures are values, never panics: each maps to a specific
//! user-facing message and a stable logging code.

/// Result type for naming-rule checks
pub type NameRuleResult = Result<(), ValidationError>;

/// Ordered naming and dependency rule violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Object name cannot be empty")]
    EmptyName,

    #[error("Object name cannot exceed {max} characters")]
    NameTooLong { length: usize, max: usize },

    #[error("Object name cannot contain spaces")]
    NameContainsSpaces,

    #[error("Object name must contain only letters (no numbers or special characters)")]
    NameNotAlphabetic,

    #[error("Object name must start with an uppercase letter (PascalCase)")]
    NameNotPascalCase,

    #[error("Object name '{name}' duplicates an earlier line in this input")]
    DuplicateInBatch { name: String },

    #[error("Object '{name}' already exists in the model")]
    DuplicateInModel { name: String },

    #[error("Lookup object names should not contain the word 'lookup'")]
    RedundantLookupName,

    #[error("A parent object is required")]
    MissingParent,

    #[error("Parent object '{parent}' does not exist in the model or earlier in this input")]
    UnknownParent { parent: String },
}

impl ValidationError {
    pub fn name_too_long(length: usize, max: usize) -> Self {
        Self::NameTooLong { length, max }
    }

    pub fn duplicate_in_batch(name: &str) -> Self {
        Self::DuplicateInBatch {
            name: name.to_string(),
        }
    }

    pub fn duplicate_in_model(name: &str) -> Self {
        Self::DuplicateInModel {
            name: name.to_string(),
        }
    }

    pub fn unknown_parent(parent: &str) -> Self {
        Self::UnknownParent {
            parent: parent.to_string(),
        }
    }

    /// Get error code for the global logging system
    pub fn error_code(&self) -> crate::logging::codes::Code {
        use crate::logging::codes;
        match self {
            Self::EmptyName => codes::naming::EMPTY_NAME,
            Self::NameTooLong { .. } => codes::naming::NAME_TOO_LONG,
            Self::NameContainsSpaces => codes::naming::NAME_CONTAINS_SPACES,
            Self::NameNotAlphabetic => codes::naming::NAME_NOT_ALPHABETIC,
            Self::NameNotPascalCase => codes::naming::NAME_NOT_PASCAL_CASE,
            Self::DuplicateInBatch { .. } => codes::naming::DUPLICATE_IN_BATCH,
            Self::DuplicateInModel { .. } => codes::naming::DUPLICATE_IN_MODEL,
            Self::RedundantLookupName => codes::naming::REDUNDANT_LOOKUP_NAME,
            Self::MissingParent => codes::dependency::MISSING_PARENT,
            Self::UnknownParent { .. } => codes::dependency::UNKNOWN_PARENT,
        }
    }
}
