//! The three diagnostic message records a TDS client library delivers.
//!
//! These are read-only snapshots of the records the library owns for the
//! duration of one callback invocation. This crate never mutates them; the
//! constructors exist for registry implementations and tests. Fields the
//! library guards with a length counter (`osstringlen`, `svrnlen`,
//! `proclen`) are modeled as `Option` — `None` when the length is zero.

use serde::{Deserialize, Serialize};

use crate::codes::MessageCode;

/// A diagnostic raised by the client-side communication library itself,
/// independent of any specific connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsLibMessage {
    /// Composite code; all four printed sub-fields come from here.
    pub code: MessageCode,
    /// Human-readable message text.
    pub text: String,
    /// OS-level error text, when the library captured one.
    pub os_text: Option<String>,
}

impl CsLibMessage {
    #[must_use]
    pub fn new(code: MessageCode, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
            os_text: None,
        }
    }

    #[must_use]
    pub fn with_os_text(mut self, os_text: impl Into<String>) -> Self {
        self.os_text = Some(os_text.into());
        self
    }
}

/// OS-level error attached to a connection-scoped client message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsError {
    pub number: i32,
    pub text: String,
}

/// A diagnostic scoped to a specific open connection, layered on top of the
/// client library proper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMessage {
    /// Severity of the diagnostic, on the client-side `CS_SV_*` scale.
    pub severity: i32,
    /// Composite code; the printed number/origin/layer come from here.
    pub code: MessageCode,
    /// Human-readable message text.
    pub text: String,
    /// OS-level error, when the library captured one.
    pub os_error: Option<OsError>,
}

impl ClientMessage {
    #[must_use]
    pub fn new(severity: i32, code: MessageCode, text: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            text: text.into(),
            os_error: None,
        }
    }

    #[must_use]
    pub fn with_os_error(mut self, number: i32, text: impl Into<String>) -> Self {
        self.os_error = Some(OsError {
            number,
            text: text.into(),
        });
        self
    }
}

/// A diagnostic originating from the remote database server, delivered back
/// over an established connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMessage {
    /// Server message number (e.g. 2601 for a duplicate-key error).
    pub number: i32,
    /// Server severity; values of 10 and below are informational.
    pub severity: i32,
    /// Server error state.
    pub state: i32,
    /// Line number in the batch or procedure that raised the message.
    pub line: i32,
    /// Name of the server, when it identified itself.
    pub server: Option<String>,
    /// Name of the stored procedure involved, if any.
    pub procedure: Option<String>,
    /// Message text.
    pub text: String,
}

impl ServerMessage {
    #[must_use]
    pub fn new(number: i32, severity: i32, state: i32, line: i32, text: impl Into<String>) -> Self {
        Self {
            number,
            severity,
            state,
            line,
            server: None,
            procedure: None,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    #[must_use]
    pub fn with_procedure(mut self, procedure: impl Into<String>) -> Self {
        self.procedure = Some(procedure.into());
        self
    }
}
