//! The three diagnostic handler entry points.

use std::sync::Arc;

use crate::config::DiagnosticsConfig;
use crate::message::{ClientMessage, CsLibMessage, ServerMessage};
use crate::sink::{Diagnostic, DiagnosticSink};

/// Acknowledgment a handler returns to the client library.
///
/// This is protocol, not a success signal: the library only wants to know
/// the message was consumed, and there is no failure path in a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum HandlerStatus {
    /// The message was consumed; the library need not report it elsewhere.
    Consumed,
}

/// Shared callback signature for client-library messages.
pub type CsLibCallback = Arc<dyn Fn(&CsLibMessage) -> HandlerStatus + Send + Sync>;
/// Shared callback signature for connection-scoped client messages.
pub type ClientCallback = Arc<dyn Fn(&ClientMessage) -> HandlerStatus + Send + Sync>;
/// Shared callback signature for server messages.
pub type ServerCallback = Arc<dyn Fn(&ServerMessage) -> HandlerStatus + Send + Sync>;

/// Bundles the three handler entry points over one shared sink.
///
/// Each handler renders the record, emits it, and acknowledges — always.
/// Every invocation prints; no distinction is made between important and
/// informational messages.
#[derive(Debug, Clone)]
pub struct DiagnosticHandlers {
    sink: Arc<dyn DiagnosticSink>,
}

impl DiagnosticHandlers {
    #[must_use]
    pub fn new(config: &DiagnosticsConfig) -> Self {
        Self {
            sink: config.sink(),
        }
    }

    pub fn on_cs_lib_message(&self, msg: &CsLibMessage) -> HandlerStatus {
        self.sink.emit(&Diagnostic::CsLib(msg));
        HandlerStatus::Consumed
    }

    pub fn on_client_message(&self, msg: &ClientMessage) -> HandlerStatus {
        self.sink.emit(&Diagnostic::Client(msg));
        HandlerStatus::Consumed
    }

    pub fn on_server_message(&self, msg: &ServerMessage) -> HandlerStatus {
        self.sink.emit(&Diagnostic::Server(msg));
        HandlerStatus::Consumed
    }

    /// The client-library handler as a shareable callback.
    #[must_use]
    pub fn cs_lib_callback(&self) -> CsLibCallback {
        let handlers = self.clone();
        Arc::new(move |msg| handlers.on_cs_lib_message(msg))
    }

    /// The client-message handler as a shareable callback.
    #[must_use]
    pub fn client_callback(&self) -> ClientCallback {
        let handlers = self.clone();
        Arc::new(move |msg| handlers.on_client_message(msg))
    }

    /// The server-message handler as a shareable callback.
    #[must_use]
    pub fn server_callback(&self) -> ServerCallback {
        let handlers = self.clone();
        Arc::new(move |msg| handlers.on_server_message(msg))
    }
}
