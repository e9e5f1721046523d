//! Hook runtime: call context, dispatch, violations, and audit records.

pub mod config;
pub mod context;
pub mod events;
pub mod log_writer;
pub mod record;
pub mod registry;
pub mod violation;

pub use config::{HookConfig, HookConfigError};
pub use context::{CallContext, FunctionCall, FunctionParameter, FunctionSignature};
pub use events::{first_event_of_kind, EmittedEvent};
pub use log_writer::{HookLogWriter, HookLogWriterError};
pub use record::{HookPhase, HookRunRecord};
pub use registry::{DispatchReport, HookRegistry, PostCallHook, PreCallHook};
pub use violation::Violation;
