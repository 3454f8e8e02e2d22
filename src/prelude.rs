//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::codes::MessageCode;
pub use crate::config::DiagnosticsConfig;
pub use crate::error::{DiagnosticsError, RegistrationFailure};
pub use crate::handler::{DiagnosticHandlers, HandlerStatus};
pub use crate::message::{ClientMessage, CsLibMessage, OsError, ServerMessage};
pub use crate::registry::{CallbackRegistry, CallbackSlot, register_diagnostics};
pub use crate::sink::{BufferSink, Diagnostic, DiagnosticSink, StderrSink, TracingSink};
