//! In-memory AppDNA model: document types and the guarded store

pub mod error;
pub mod objects;
pub mod store;

pub use error::{ModelError, ModelResult};
pub use objects::{AppModel, LookupItem, ModelObject, Namespace, PropertyDefinition};
pub use store::{ChangeListener, ModelChange, ModelCommand, ModelStore};
