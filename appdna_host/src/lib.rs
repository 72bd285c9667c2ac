// Internal modules
pub mod dispatch;
pub mod error;
pub mod messages;
pub mod panels;

// Re-export key types for host consumers
pub use dispatch::MessageDispatcher;
pub use error::{HostError, HostResult};
pub use messages::{PanelEvent, PanelRequest};
pub use panels::{OpenOutcome, PanelHandle, PanelManager};
