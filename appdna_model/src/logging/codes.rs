//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and
//! classification functions used by the global logging system.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Declaration parsing error codes
pub mod parsing {
    use super::Code;

    pub const UNRECOGNIZED_DECLARATION: Code = Code::new("E020");
    pub const EMPTY_BATCH: Code = Code::new("E021");
    pub const BATCH_TOO_LARGE: Code = Code::new("E022");
    pub const INPUT_TOO_LARGE: Code = Code::new("E023");
}

/// Naming rule error codes
pub mod naming {
    use super::Code;

    pub const EMPTY_NAME: Code = Code::new("E030");
    pub const NAME_TOO_LONG: Code = Code::new("E031");
    pub const NAME_CONTAINS_SPACES: Code = Code::new("E032");
    pub const NAME_NOT_ALPHABETIC: Code = Code::new("E033");
    pub const NAME_NOT_PASCAL_CASE: Code = Code::new("E034");
    pub const DUPLICATE_IN_BATCH: Code = Code::new("E035");
    pub const DUPLICATE_IN_MODEL: Code = Code::new("E036");
    pub const REDUNDANT_LOOKUP_NAME: Code = Code::new("E037");
}

/// Parent dependency error codes
pub mod dependency {
    use super::Code;

    pub const MISSING_PARENT: Code = Code::new("E040");
    pub const UNKNOWN_PARENT: Code = Code::new("E041");
}

/// Batch commit error codes
pub mod commit {
    use super::Code;

    pub const MODEL_UNAVAILABLE: Code = Code::new("E050");
    pub const COMMIT_REJECTED: Code = Code::new("E051");
}

/// Model store error codes
pub mod model {
    use super::Code;

    pub const DUPLICATE_OBJECT_NAME: Code = Code::new("E060");
    pub const MODEL_IO_ERROR: Code = Code::new("E061");
    pub const MODEL_PARSE_ERROR: Code = Code::new("E062");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const BATCH_VALIDATION_COMPLETE: Code = Code::new("I002");
    pub const BATCH_COMMIT_COMPLETE: Code = Code::new("I003");
    pub const OBJECT_CREATED: Code = Code::new("I004");
    pub const MODEL_LOADED: Code = Code::new("I005");
    pub const MODEL_SAVED: Code = Code::new("I006");
    pub const PIPELINE_VALIDATION_PASSED: Code = Code::new("I007");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static METADATA: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn metadata_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    METADATA.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Internal error in the model engine",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "Subsystem failed to initialize",
            ),
            ErrorMetadata::new(
                "E020",
                "Parsing",
                Severity::Low,
                true,
                false,
                "Declaration line matches neither supported pattern",
            ),
            ErrorMetadata::new(
                "E021",
                "Parsing",
                Severity::Low,
                true,
                false,
                "Batch submission contains no declaration lines",
            ),
            ErrorMetadata::new(
                "E022",
                "Parsing",
                Severity::Medium,
                true,
                false,
                "Batch submission exceeds the line limit",
            ),
            ErrorMetadata::new(
                "E023",
                "Parsing",
                Severity::Medium,
                true,
                false,
                "Batch submission exceeds the input size limit",
            ),
            ErrorMetadata::new(
                "E030",
                "Naming",
                Severity::Low,
                true,
                false,
                "Object name is empty",
            ),
            ErrorMetadata::new(
                "E031",
                "Naming",
                Severity::Low,
                true,
                false,
                "Object name exceeds the maximum length",
            ),
            ErrorMetadata::new(
                "E032",
                "Naming",
                Severity::Low,
                true,
                false,
                "Object name contains space characters",
            ),
            ErrorMetadata::new(
                "E033",
                "Naming",
                Severity::Low,
                true,
                false,
                "Object name contains non-alphabetic characters",
            ),
            ErrorMetadata::new(
                "E034",
                "Naming",
                Severity::Low,
                true,
                false,
                "Object name does not start with an uppercase letter",
            ),
            ErrorMetadata::new(
                "E035",
                "Naming",
                Severity::Low,
                true,
                false,
                "Object name duplicates an earlier line in the same batch",
            ),
            ErrorMetadata::new(
                "E036",
                "Naming",
                Severity::Low,
                true,
                false,
                "Object name already exists in the model",
            ),
            ErrorMetadata::new(
                "E037",
                "Naming",
                Severity::Low,
                true,
                false,
                "Lookup object name redundantly contains 'lookup'",
            ),
            ErrorMetadata::new(
                "E040",
                "Dependency",
                Severity::Low,
                true,
                false,
                "Non-lookup declaration has no parent object",
            ),
            ErrorMetadata::new(
                "E041",
                "Dependency",
                Severity::Low,
                true,
                false,
                "Parent object is neither persisted nor declared earlier in the batch",
            ),
            ErrorMetadata::new(
                "E050",
                "Commit",
                Severity::High,
                false,
                false,
                "Model store was unavailable during commit",
            ),
            ErrorMetadata::new(
                "E051",
                "Commit",
                Severity::High,
                false,
                false,
                "Model store rejected the staged batch",
            ),
            ErrorMetadata::new(
                "E060",
                "Model",
                Severity::High,
                true,
                false,
                "Insertion would violate the global object-name uniqueness invariant",
            ),
            ErrorMetadata::new(
                "E061",
                "Model",
                Severity::High,
                true,
                false,
                "Model document could not be read or written",
            ),
            ErrorMetadata::new(
                "E062",
                "Model",
                Severity::High,
                true,
                false,
                "Model document is not valid JSON",
            ),
        ];

        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_description(code: &str) -> &'static str {
    metadata_registry()
        .get(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

pub fn get_category(code: &str) -> &'static str {
    if code.starts_with('I') {
        return "Success";
    }
    metadata_registry()
        .get(code)
        .map(|m| m.category)
        .unwrap_or("Unknown")
}

pub fn get_severity(code: &str) -> Severity {
    metadata_registry()
        .get(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    metadata_registry()
        .get(code)
        .map(|m| m.recoverable)
        .unwrap_or(true)
}

pub fn requires_halt(code: &str) -> bool {
    metadata_registry()
        .get(code)
        .map(|m| m.requires_halt)
        .unwrap_or(false)
}

/// All error codes the registry knows about (for pipeline self-checks)
pub fn registered_error_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = metadata_registry().keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(naming::EMPTY_NAME.as_str(), "E030");
        assert_eq!(format!("{}", dependency::UNKNOWN_PARENT), "E041");
    }

    #[test]
    fn test_metadata_lookup() {
        assert_eq!(get_category("E035"), "Naming");
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert!(requires_halt("ERR001"));
        assert!(is_recoverable("E041"));
        assert_eq!(get_description("ZZZ"), "Unknown error");
    }

    #[test]
    fn test_success_codes_classify_as_success() {
        assert_eq!(get_category(success::BATCH_COMMIT_COMPLETE.as_str()), "Success");
    }

    #[test]
    fn test_all_error_codes_registered() {
        let all = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            parsing::UNRECOGNIZED_DECLARATION,
            parsing::EMPTY_BATCH,
            parsing::BATCH_TOO_LARGE,
            parsing::INPUT_TOO_LARGE,
            naming::EMPTY_NAME,
            naming::NAME_TOO_LONG,
            naming::NAME_CONTAINS_SPACES,
            naming::NAME_NOT_ALPHABETIC,
            naming::NAME_NOT_PASCAL_CASE,
            naming::DUPLICATE_IN_BATCH,
            naming::DUPLICATE_IN_MODEL,
            naming::REDUNDANT_LOOKUP_NAME,
            dependency::MISSING_PARENT,
            dependency::UNKNOWN_PARENT,
            commit::MODEL_UNAVAILABLE,
            commit::COMMIT_REJECTED,
            model::DUPLICATE_OBJECT_NAME,
            model::MODEL_IO_ERROR,
            model::MODEL_PARSE_ERROR,
        ];

        for code in all {
            assert_ne!(
                get_description(code.as_str()),
                "Unknown error",
                "missing metadata for {}",
                code
            );
        }
    }
}
