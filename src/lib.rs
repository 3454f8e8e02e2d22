//! Diagnostic message formatting and callback registration for TDS-family
//! database clients.
//!
//! CT-Library style client libraries report problems through three callback
//! channels: generic client-library messages on the context, and client- and
//! server-message callbacks on the callback table. This crate provides the
//! three fixed-format handlers, pure rendering functions for each record
//! shape, and a `Result`-based registration routine over a
//! [`CallbackRegistry`](registry::CallbackRegistry) seam instead of a bare
//! configuration call against ambient library state.
//!
//! ```rust
//! use std::sync::Arc;
//! use tds_diagnostics::prelude::*;
//!
//! let sink = Arc::new(BufferSink::new());
//! let config = DiagnosticsConfig::builder().sink(Arc::clone(&sink)).finish();
//! let handlers = DiagnosticHandlers::new(&config);
//!
//! let msg = ServerMessage::new(2601, 14, 1, 3, "duplicate key").with_server("SYB1");
//! let status = handlers.on_server_message(&msg);
//! assert_eq!(status, HandlerStatus::Consumed);
//! assert!(sink.entries()[0].starts_with("Server message:"));
//! ```

pub mod codes;
pub mod config;
pub mod error;
pub mod format;
pub mod handler;
pub mod message;
pub mod registry;
pub mod sink;

pub mod prelude;

pub use codes::MessageCode;
pub use config::{DiagnosticsConfig, DiagnosticsConfigBuilder};
pub use error::{DiagnosticsError, RegistrationFailure};
pub use handler::{DiagnosticHandlers, HandlerStatus};
pub use message::{ClientMessage, CsLibMessage, OsError, ServerMessage};
pub use registry::{CallbackRegistry, CallbackSlot, register_diagnostics};
pub use sink::{BufferSink, Diagnostic, DiagnosticSink, StderrSink, TracingSink};
