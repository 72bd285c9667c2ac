//! Persisted AppDNA document types
//!
//! These structs mirror the on-disk model JSON exactly. Several fields are
//! boolean-valued but stored as the string literals "true"/"false" in the
//! document; they are real `bool`s in memory and the `string_bool` codec
//! handles the wire representation.

use crate::config::compile_time::model::{
    DEFAULT_LOOKUP_ITEM_NAME, DEFAULT_NAMESPACE_NAME, FK_PROPERTY_DATA_TYPE,
};
use serde::{Deserialize, Serialize};

/// Serde codec for booleans persisted as "true"/"false" strings
pub mod string_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(other),
                &"\"true\" or \"false\"",
            )),
        }
    }
}

/// One property (column) of a model object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub name: String,

    #[serde(rename = "sqlServerDBDataType")]
    pub sql_server_db_data_type: String,

    #[serde(rename = "isFK", with = "string_bool")]
    pub is_fk: bool,

    /// Present only on FK properties pointing at a lookup object
    #[serde(
        rename = "isFKLookup",
        with = "option_string_bool",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_fk_lookup: Option<bool>,

    #[serde(with = "string_bool")]
    pub is_not_published_to_subscriptions: bool,

    #[serde(rename = "isFKConstraintSuppressed", with = "string_bool")]
    pub is_fk_constraint_suppressed: bool,
}

/// Serde codec for optional string-booleans
pub mod option_string_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<bool>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::string_bool::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None => Ok(None),
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(other) => Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(other),
                &"\"true\" or \"false\"",
            )),
        }
    }
}

impl PropertyDefinition {
    /// Synthesized foreign-key property pointing at `parent_name`
    pub fn foreign_key(parent_name: &str) -> Self {
        Self {
            name: format!("{}ID", parent_name),
            sql_server_db_data_type: FK_PROPERTY_DATA_TYPE.to_string(),
            is_fk: true,
            is_fk_lookup: None,
            is_not_published_to_subscriptions: true,
            is_fk_constraint_suppressed: false,
        }
    }

    /// Flag this FK as pointing at (or belonging to) a lookup object
    pub fn with_fk_lookup(mut self) -> Self {
        self.is_fk_lookup = Some(true);
        self
    }
}

/// One enumeration entry of a lookup object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupItem {
    pub name: String,
    pub description: String,
    pub display_name: String,

    #[serde(with = "string_bool")]
    pub is_active: bool,
}

impl LookupItem {
    /// The single entry every new lookup object starts with
    pub fn default_entry() -> Self {
        Self {
            name: DEFAULT_LOOKUP_ITEM_NAME.to_string(),
            description: String::new(),
            display_name: String::new(),
            is_active: true,
        }
    }
}

/// A committed model object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelObject {
    pub name: String,

    pub parent_object_name: String,

    #[serde(with = "string_bool")]
    pub is_lookup: bool,

    #[serde(default)]
    pub prop: Vec<PropertyDefinition>,

    #[serde(default)]
    pub lookup_item: Vec<LookupItem>,

    // Reserved for other features; empty at creation, round-trips untouched
    #[serde(default)]
    pub prop_subscription: Vec<serde_json::Value>,

    #[serde(default)]
    pub model_pkg: Vec<serde_json::Value>,
}

impl ModelObject {
    pub fn new(name: &str, parent_object_name: &str, is_lookup: bool) -> Self {
        Self {
            name: name.to_string(),
            parent_object_name: parent_object_name.to_string(),
            is_lookup,
            prop: Vec::new(),
            lookup_item: Vec::new(),
            prop_subscription: Vec::new(),
            model_pkg: Vec::new(),
        }
    }

    pub fn is_root_level(&self) -> bool {
        self.parent_object_name.is_empty()
    }
}

/// Named grouping container for objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub name: String,

    #[serde(default)]
    pub object: Vec<ModelObject>,
}

impl Namespace {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            object: Vec::new(),
        }
    }

    pub fn default_namespace() -> Self {
        Self::new(DEFAULT_NAMESPACE_NAME)
    }
}

/// Root of the in-memory model document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppModel {
    #[serde(default)]
    pub namespace: Vec<Namespace>,
}

impl AppModel {
    /// Case-sensitive object lookup across all namespaces
    pub fn find_object(&self, name: &str) -> Option<&ModelObject> {
        self.namespace
            .iter()
            .flat_map(|ns| ns.object.iter())
            .find(|obj| obj.name == name)
    }

    pub fn object_exists(&self, name: &str) -> bool {
        self.find_object(name).is_some()
    }

    pub fn object_count(&self) -> usize {
        self.namespace.iter().map(|ns| ns.object.len()).sum()
    }
}
