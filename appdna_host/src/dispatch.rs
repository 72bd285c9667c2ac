//! Message dispatcher
//!
//! Routes `{command, data}` requests from a panel into the model pipeline
//! and converts every failure into an event the panel can render.
//! Validation requests never fail the dispatch; commit failures answer a
//! generic error event while the specifics go to the log.

use crate::error::{HostError, HostResult};
use crate::messages::{PanelEvent, PanelRequest};
use crate::panels::PanelManager;
use appdna_model::config::runtime::ValidationPreferences;
use appdna_model::model::ModelStore;
use appdna_model::parser::Declaration;
use appdna_model::validation::{self, BatchValidator};
use appdna_model::{commit, log_warning, pipeline};
use std::sync::{Arc, Mutex, MutexGuard};

const BULK_COMMIT_FAILED_MESSAGE: &str = "There was an unexpected error creating the objects";
const COMMIT_FAILED_MESSAGE: &str = "There was an unexpected error creating the object";
const MODEL_UNAVAILABLE_MESSAGE: &str = "The model is not available";

/// Connects panels to the shared model store
pub struct MessageDispatcher {
    store: Arc<Mutex<ModelStore>>,
    panels: PanelManager,
    prefs: ValidationPreferences,
}

impl MessageDispatcher {
    pub fn new(
        store: Arc<Mutex<ModelStore>>,
        panels: PanelManager,
        prefs: ValidationPreferences,
    ) -> Self {
        Self {
            store,
            panels,
            prefs,
        }
    }

    pub fn panels(&self) -> &PanelManager {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut PanelManager {
        &mut self.panels
    }

    /// Handle one request from the panel identified by `panel_key`.
    ///
    /// Every request except `cancel` yields a reply event.
    pub fn handle(&mut self, panel_key: &str, request: PanelRequest) -> Option<PanelEvent> {
        match request {
            PanelRequest::ValidateName {
                object_name,
                is_lookup_object,
            } => Some(self.handle_validate_name(object_name, is_lookup_object)),

            PanelRequest::ValidateBulkObjects { input } => {
                Some(self.handle_validate_bulk(&input))
            }

            PanelRequest::CreateBulkObjects { objects } => {
                Some(self.handle_create_bulk(&objects))
            }

            PanelRequest::CreateObject {
                object_name,
                parent_object_name,
                is_lookup_object,
            } => Some(self.handle_create_object(object_name, &parent_object_name, is_lookup_object)),

            PanelRequest::Cancel => {
                if let Err(error) = self.panels.dispose(panel_key) {
                    log_warning!("Cancel for unknown panel", "key" => panel_key, "error" => error);
                }
                None
            }
        }
    }

    fn handle_validate_name(&self, object_name: String, is_lookup: bool) -> PanelEvent {
        let store = match self.lock_store() {
            Ok(store) => store,
            Err(_) => {
                return PanelEvent::Error {
                    message: MODEL_UNAVAILABLE_MESSAGE.to_string(),
                }
            }
        };

        let result = validation::validate_name(&object_name, is_lookup, &store);
        PanelEvent::NameValidation {
            object_name,
            is_valid: result.is_valid,
            message: result.message,
        }
    }

    fn handle_validate_bulk(&self, input: &str) -> PanelEvent {
        let store = match self.lock_store() {
            Ok(store) => store,
            Err(_) => {
                return PanelEvent::BulkError {
                    message: MODEL_UNAVAILABLE_MESSAGE.to_string(),
                }
            }
        };

        match pipeline::validate_bulk_input(input, &store, &self.prefs) {
            Ok(outcome) => PanelEvent::BulkValidationResults {
                results: outcome.results,
                valid_objects: outcome.valid_declarations,
            },
            // Batch-level limit violation; the message names the limit
            Err(error) => PanelEvent::BulkError {
                message: error.to_string(),
            },
        }
    }

    fn handle_create_bulk(&self, objects: &[Declaration]) -> PanelEvent {
        let mut store = match self.lock_store() {
            Ok(store) => store,
            Err(_) => {
                return PanelEvent::BulkError {
                    message: MODEL_UNAVAILABLE_MESSAGE.to_string(),
                }
            }
        };

        match pipeline::commit_bulk(&mut store, objects) {
            Ok(count) => PanelEvent::BulkObjectsCreated { count },
            Err(error) => {
                log_warning!("Bulk commit rejected", "error" => error);
                PanelEvent::BulkError {
                    message: BULK_COMMIT_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }

    fn handle_create_object(
        &self,
        object_name: String,
        parent_object_name: &str,
        is_lookup: bool,
    ) -> PanelEvent {
        let mut store = match self.lock_store() {
            Ok(store) => store,
            Err(_) => {
                return PanelEvent::Error {
                    message: MODEL_UNAVAILABLE_MESSAGE.to_string(),
                }
            }
        };

        let declaration = if is_lookup {
            Declaration::lookup(&format!("{} is a lookup", object_name), &object_name)
        } else {
            Declaration::child(
                &format!("{} is a child of {}", object_name, parent_object_name),
                &object_name,
                parent_object_name,
            )
        };

        // Full rule check, parent resolution included
        let mut validator = BatchValidator::new(&store);
        if let Err(rule_error) = validator.check(&declaration) {
            return PanelEvent::Error {
                message: rule_error.to_string(),
            };
        }

        match commit::commit_single(&mut store, &object_name, parent_object_name, is_lookup) {
            Ok(()) => PanelEvent::ObjectCreated { object_name },
            Err(error) => {
                log_warning!("Single-object commit rejected", "error" => error);
                PanelEvent::Error {
                    message: COMMIT_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }

    fn lock_store(&self) -> HostResult<MutexGuard<'_, ModelStore>> {
        self.store
            .lock()
            .map_err(|_| HostError::model_unavailable("model store lock poisoned"))
    }
}
