//! Parsed declaration types

use serde::{Deserialize, Serialize};

/// One parsed object declaration, not yet committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    /// Original text, trimmed
    pub raw_line: String,

    /// Extracted candidate object name
    pub object_name: String,

    /// Extracted parent name; the sentinel root object for lookups
    pub parent_object_name: String,

    pub is_lookup: bool,
}

impl Declaration {
    pub fn child(raw_line: &str, object_name: &str, parent_object_name: &str) -> Self {
        Self {
            raw_line: raw_line.to_string(),
            object_name: object_name.to_string(),
            parent_object_name: parent_object_name.to_string(),
            is_lookup: false,
        }
    }

    pub fn lookup(raw_line: &str, object_name: &str) -> Self {
        Self {
            raw_line: raw_line.to_string(),
            object_name: object_name.to_string(),
            parent_object_name: crate::config::compile_time::model::ROOT_OBJECT_NAME.to_string(),
            is_lookup: true,
        }
    }
}

/// One non-blank input line with its original position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based position in the raw input, blank lines counted
    pub line_number: usize,

    pub outcome: Result<Declaration, super::error::ParseError>,
}

impl ParsedLine {
    pub fn is_declaration(&self) -> bool {
        self.outcome.is_ok()
    }
}
