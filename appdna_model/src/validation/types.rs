//! Validation output types sent back to the panel

use serde::{Deserialize, Serialize};

/// Per-line validation verdict, rendered verbatim by the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Human-readable line reference ("Line 3")
    pub line_descriptor: String,

    pub is_valid: bool,

    /// Success or failure explanation
    pub message: String,
}

impl ValidationResult {
    pub fn valid(line_descriptor: &str, message: &str) -> Self {
        Self {
            line_descriptor: line_descriptor.to_string(),
            is_valid: true,
            message: message.to_string(),
        }
    }

    pub fn invalid(line_descriptor: &str, message: &str) -> Self {
        Self {
            line_descriptor: line_descriptor.to_string(),
            is_valid: false,
            message: message.to_string(),
        }
    }

    pub fn for_line(line_number: usize, is_valid: bool, message: &str) -> Self {
        let descriptor = format!("Line {}", line_number);
        if is_valid {
            Self::valid(&descriptor, message)
        } else {
            Self::invalid(&descriptor, message)
        }
    }
}
