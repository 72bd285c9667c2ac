// Internal modules
pub mod commit;
pub mod config;
#[macro_use]
pub mod logging;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod validation;

// Re-export key types for library consumers
pub use model::{AppModel, ModelChange, ModelCommand, ModelError, ModelObject, ModelStore};
pub use parser::Declaration;
pub use pipeline::{BulkValidationOutcome, PipelineError, PipelineResult};
pub use validation::ValidationResult;
