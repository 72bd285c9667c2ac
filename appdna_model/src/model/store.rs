//! Model store: the single mutation entry point for the shared model
//!
//! All writers go through `apply(ModelCommand)`. The store enforces the
//! global object-name uniqueness invariant, keeps the unsaved-changes flag,
//! and notifies injected listeners (the tree-view refresh signal among them)
//! once per applied command.

use super::error::{ModelError, ModelResult};
use super::objects::{AppModel, ModelObject, Namespace};
use crate::config::compile_time::model::MAX_MODEL_FILE_SIZE;
use crate::{log_debug, log_success};
use std::collections::HashSet;
use std::io::{Read, Write};

/// Change notifications emitted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelChange {
    /// Objects were appended; payload is their names in insertion order
    ObjectsAdded(Vec<String>),
}

/// Seam for dependents that must react to model mutations
pub trait ChangeListener: Send {
    fn on_change(&mut self, change: &ModelChange);
}

/// Mutation commands accepted by the store
#[derive(Debug, Clone)]
pub enum ModelCommand {
    /// Append objects to the first namespace, in the given order
    AddObjects { objects: Vec<ModelObject> },
}

/// Owns the in-memory model and guards its invariants
pub struct ModelStore {
    model: AppModel,
    has_unsaved_changes: bool,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl std::fmt::Debug for ModelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelStore")
            .field("model", &self.model)
            .field("has_unsaved_changes", &self.has_unsaved_changes)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ModelStore {
    pub fn new(model: AppModel) -> Self {
        Self {
            model,
            has_unsaved_changes: false,
            listeners: Vec::new(),
        }
    }

    /// Empty model with no namespaces; a default one is synthesized on
    /// first insertion
    pub fn empty() -> Self {
        Self::new(AppModel::default())
    }

    /// Load a model document from JSON text
    pub fn load_from_str(json: &str) -> ModelResult<Self> {
        let model: AppModel = serde_json::from_str(json).map_err(|e| ModelError::Parse {
            message: e.to_string(),
        })?;

        log_success!(
            crate::logging::codes::success::MODEL_LOADED,
            "Model document loaded",
            "objects" => model.object_count()
        );

        Ok(Self::new(model))
    }

    /// Load a model document from a reader, bounded by the document size limit
    pub fn load_from_reader<R: Read>(reader: R) -> ModelResult<Self> {
        let mut content = String::new();
        reader
            .take(MAX_MODEL_FILE_SIZE + 1)
            .read_to_string(&mut content)
            .map_err(|e| ModelError::Io {
                message: e.to_string(),
            })?;

        if content.len() as u64 > MAX_MODEL_FILE_SIZE {
            return Err(ModelError::Io {
                message: format!("model document exceeds {} bytes", MAX_MODEL_FILE_SIZE),
            });
        }

        Self::load_from_str(&content)
    }

    /// Serialize the model document to JSON text
    pub fn save_to_string(&self) -> ModelResult<String> {
        serde_json::to_string_pretty(&self.model).map_err(|e| ModelError::Parse {
            message: e.to_string(),
        })
    }

    /// Write the model document to a writer
    pub fn save_to_writer<W: Write>(&mut self, mut writer: W) -> ModelResult<()> {
        let json = self.save_to_string()?;
        writer
            .write_all(json.as_bytes())
            .map_err(|e| ModelError::Io {
                message: e.to_string(),
            })?;
        self.has_unsaved_changes = false;

        log_success!(
            crate::logging::codes::success::MODEL_SAVED,
            "Model document saved",
            "objects" => self.object_count()
        );

        Ok(())
    }

    /// Register a change listener
    pub fn add_listener(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn object_exists(&self, name: &str) -> bool {
        self.model.object_exists(name)
    }

    pub fn object_count(&self) -> usize {
        self.model.object_count()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_unsaved_changes
    }

    /// First namespace of the model, if any
    pub fn first_namespace(&self) -> Option<&Namespace> {
        self.model.namespace.first()
    }

    /// Apply a mutation command. Commands are all-or-nothing: invariant
    /// violations reject the whole command and leave the model untouched.
    pub fn apply(&mut self, command: ModelCommand) -> ModelResult<()> {
        match command {
            ModelCommand::AddObjects { objects } => self.apply_add_objects(objects),
        }
    }

    fn apply_add_objects(&mut self, objects: Vec<ModelObject>) -> ModelResult<()> {
        // Validate the whole command before mutating anything
        let mut staged_names: HashSet<&str> = HashSet::new();
        for object in &objects {
            if self.model.object_exists(&object.name) {
                return Err(ModelError::duplicate_object_name(&object.name));
            }
            if !staged_names.insert(object.name.as_str()) {
                return Err(ModelError::duplicate_in_command(&object.name));
            }
        }

        if self.model.namespace.is_empty() {
            log_debug!("Model has no namespace; synthesizing default");
            self.model.namespace.push(Namespace::default_namespace());
        }

        let names: Vec<String> = objects.iter().map(|o| o.name.clone()).collect();

        // Target is always the first namespace
        self.model.namespace[0].object.extend(objects);
        self.has_unsaved_changes = true;

        log_success!(
            crate::logging::codes::success::OBJECT_CREATED,
            "Objects appended to model",
            "count" => names.len(),
            "namespace" => self.model.namespace[0].name
        );

        self.notify(&ModelChange::ObjectsAdded(names));
        Ok(())
    }

    fn notify(&mut self, change: &ModelChange) {
        for listener in &mut self.listeners {
            listener.on_change(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::sync::{Arc, Mutex};

    struct RecordingListener {
        changes: Arc<Mutex<Vec<ModelChange>>>,
    }

    impl ChangeListener for RecordingListener {
        fn on_change(&mut self, change: &ModelChange) {
            self.changes.lock().unwrap().push(change.clone());
        }
    }

    fn store_with_object(name: &str) -> ModelStore {
        let mut store = ModelStore::empty();
        store
            .apply(ModelCommand::AddObjects {
                objects: vec![ModelObject::new(name, "Pac", false)],
            })
            .unwrap();
        store
    }

    #[test]
    fn test_add_objects_synthesizes_default_namespace() {
        let store = store_with_object("Customer");

        let ns = store.first_namespace().unwrap();
        assert_eq!(ns.name, "Default");
        assert_eq!(ns.object.len(), 1);
        assert!(store.object_exists("Customer"));
        assert!(store.has_unsaved_changes());
    }

    #[test]
    fn test_duplicate_against_persisted_rejected() {
        let mut store = store_with_object("Customer");

        let result = store.apply(ModelCommand::AddObjects {
            objects: vec![ModelObject::new("Customer", "Pac", false)],
        });

        assert_matches!(result, Err(ModelError::DuplicateObjectName { name }) if name == "Customer");
        assert_eq!(store.object_count(), 1);
    }

    #[test]
    fn test_duplicate_within_command_rejects_whole_command() {
        let mut store = ModelStore::empty();

        let result = store.apply(ModelCommand::AddObjects {
            objects: vec![
                ModelObject::new("Foo", "Pac", true),
                ModelObject::new("Foo", "Pac", true),
            ],
        });

        assert_matches!(result, Err(ModelError::DuplicateInCommand { .. }));
        // All-or-nothing: nothing was appended
        assert_eq!(store.object_count(), 0);
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn test_uniqueness_spans_namespaces() {
        let json = r#"{
            "namespace": [
                {"name": "First", "object": [{"name": "Customer", "parentObjectName": "Pac", "isLookup": "false"}]},
                {"name": "Second", "object": []}
            ]
        }"#;
        let mut store = ModelStore::load_from_str(json).unwrap();

        let result = store.apply(ModelCommand::AddObjects {
            objects: vec![ModelObject::new("Customer", "Pac", false)],
        });
        assert_matches!(result, Err(ModelError::DuplicateObjectName { .. }));
    }

    #[test]
    fn test_insertion_preserves_order_and_notifies_once() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let mut store = ModelStore::empty();
        store.add_listener(Box::new(RecordingListener {
            changes: changes.clone(),
        }));

        store
            .apply(ModelCommand::AddObjects {
                objects: vec![
                    ModelObject::new("Customer", "Pac", false),
                    ModelObject::new("Order", "Customer", false),
                ],
            })
            .unwrap();

        let ns = store.first_namespace().unwrap();
        assert_eq!(ns.object[0].name, "Customer");
        assert_eq!(ns.object[1].name, "Order");

        let recorded = changes.lock().unwrap();
        assert_eq!(
            *recorded,
            vec![ModelChange::ObjectsAdded(vec![
                "Customer".to_string(),
                "Order".to_string()
            ])]
        );
    }

    #[test]
    fn test_save_round_trip_clears_dirty_flag() {
        let mut store = store_with_object("Customer");
        assert!(store.has_unsaved_changes());

        let mut buffer = Vec::new();
        store.save_to_writer(&mut buffer).unwrap();
        assert!(!store.has_unsaved_changes());

        let reloaded = ModelStore::load_from_reader(buffer.as_slice()).unwrap();
        assert!(reloaded.object_exists("Customer"));
        assert_eq!(reloaded.model(), store.model());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        assert_matches!(
            ModelStore::load_from_str("{not json"),
            Err(ModelError::Parse { .. })
        );
    }
}
