//! Webview message protocol
//!
//! Every message crossing the panel boundary is a `{command, data}` object.
//! The `command` string selects the variant and `data` carries the payload;
//! a payload-free message serializes without a `data` key.

use appdna_model::{Declaration, ValidationResult};
use serde::{Deserialize, Serialize};

/// Inbound requests from a panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data", rename_all = "camelCase")]
pub enum PanelRequest {
    /// Validate a pasted multi-line declaration batch
    ValidateBulkObjects { input: String },

    /// Live check of the name-entry field
    ValidateName {
        #[serde(rename = "objectName")]
        object_name: String,
        #[serde(rename = "isLookupObject")]
        is_lookup_object: bool,
    },

    CreateObject {
        #[serde(rename = "objectName")]
        object_name: String,
        #[serde(rename = "parentObjectName")]
        parent_object_name: String,
        #[serde(rename = "isLookupObject")]
        is_lookup_object: bool,
    },

    /// Commit declarations previously returned as `validObjects`
    CreateBulkObjects { objects: Vec<Declaration> },

    Cancel,
}

/// Outbound events to a panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data", rename_all = "camelCase")]
pub enum PanelEvent {
    /// Live verdict for the name-entry field
    NameValidation {
        #[serde(rename = "objectName")]
        object_name: String,
        #[serde(rename = "isValid")]
        is_valid: bool,
        message: String,
    },

    /// Per-line verdicts plus the declarations eligible for commit
    BulkValidationResults {
        results: Vec<ValidationResult>,
        #[serde(rename = "validObjects")]
        valid_objects: Vec<Declaration>,
    },

    ObjectCreated {
        #[serde(rename = "objectName")]
        object_name: String,
    },

    BulkObjectsCreated { count: usize },

    /// Single-object request failed
    Error { message: String },

    /// Bulk request failed as a whole
    BulkError { message: String },
}
