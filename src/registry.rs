//! The registration boundary between this crate and the client library.

use std::fmt;

use crate::config::DiagnosticsConfig;
use crate::error::DiagnosticsError;
use crate::handler::{ClientCallback, CsLibCallback, DiagnosticHandlers, ServerCallback};

/// One of the three callback attachment points the client library exposes:
/// the generic message callback on the context, and the client- and
/// server-message callbacks on the callback table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackSlot {
    CsLibMessage,
    ClientMessage,
    ServerMessage,
}

impl fmt::Display for CallbackSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallbackSlot::CsLibMessage => "cs-library-message",
            CallbackSlot::ClientMessage => "client-message",
            CallbackSlot::ServerMessage => "server-message",
        };
        f.write_str(name)
    }
}

/// The client library's callback-configuration surface.
///
/// An implementation owns an initialized library context; this crate does
/// not create or validate one. Each setter corresponds to one configuration
/// call against that context.
pub trait CallbackRegistry {
    /// Attach the generic (CS-Library) message callback to the context.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticsError::Registration` if the library rejects the
    /// configuration call.
    fn set_cs_lib_callback(&mut self, callback: CsLibCallback) -> Result<(), DiagnosticsError>;

    /// Attach the client-message callback to the callback table.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticsError::Registration` if the library rejects the
    /// configuration call.
    fn set_client_callback(&mut self, callback: ClientCallback) -> Result<(), DiagnosticsError>;

    /// Attach the server-message callback to the callback table.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticsError::Registration` if the library rejects the
    /// configuration call.
    fn set_server_callback(&mut self, callback: ServerCallback) -> Result<(), DiagnosticsError>;
}

/// Attach the three diagnostic handlers to a registry, in fixed order:
/// CS-Library message, client message, server message.
///
/// Stops at the first failed registration and returns its error; already
/// attached callbacks are left in place, and whether the failure is fatal is
/// the caller's decision. Registering twice on the same registry is neither
/// prevented nor given defined semantics here — that contract belongs to the
/// registry implementation.
///
/// # Errors
///
/// Returns the `DiagnosticsError::Registration` of the first configuration
/// call the registry rejects.
pub fn register_diagnostics<R>(
    registry: &mut R,
    config: &DiagnosticsConfig,
) -> Result<(), DiagnosticsError>
where
    R: CallbackRegistry + ?Sized,
{
    let handlers = DiagnosticHandlers::new(config);

    registry.set_cs_lib_callback(handlers.cs_lib_callback())?;
    tracing::debug!(slot = %CallbackSlot::CsLibMessage, "diagnostic callback registered");

    registry.set_client_callback(handlers.client_callback())?;
    tracing::debug!(slot = %CallbackSlot::ClientMessage, "diagnostic callback registered");

    registry.set_server_callback(handlers.server_callback())?;
    tracing::debug!(slot = %CallbackSlot::ServerMessage, "diagnostic callback registered");

    Ok(())
}
