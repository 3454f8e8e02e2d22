//! Destinations for rendered diagnostics.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

use crate::codes::severity_name;
use crate::format::{render_client, render_cs_lib, render_server};
use crate::message::{ClientMessage, CsLibMessage, ServerMessage};

/// A borrowed view of one diagnostic, handed to sinks so they can look at
/// the record (severity routing, structured capture) as well as the text.
#[derive(Debug, Clone, Copy)]
pub enum Diagnostic<'a> {
    /// Client-library (CS-Library) diagnostic.
    CsLib(&'a CsLibMessage),
    /// Connection-scoped client diagnostic.
    Client(&'a ClientMessage),
    /// Server diagnostic.
    Server(&'a ServerMessage),
}

impl Diagnostic<'_> {
    /// The fixed-format text for this diagnostic.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Diagnostic::CsLib(m) => render_cs_lib(m),
            Diagnostic::Client(m) => render_client(m),
            Diagnostic::Server(m) => render_server(m),
        }
    }

    /// Severity of the underlying record.
    #[must_use]
    pub fn severity(&self) -> i32 {
        match self {
            #[allow(clippy::cast_possible_wrap)]
            Diagnostic::CsLib(m) => m.code.severity() as i32,
            Diagnostic::Client(m) => m.severity,
            Diagnostic::Server(m) => m.severity,
        }
    }
}

/// Where diagnostics go once rendered.
///
/// Sinks never report failure back to the handler; a diagnostic callback has
/// no failure path to propagate into.
pub trait DiagnosticSink: fmt::Debug + Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic<'_>);
}

/// The reference behavior: plain text on the process error stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, diagnostic: &Diagnostic<'_>) {
        let rendered = diagnostic.render();
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(rendered.as_bytes());
    }
}

/// Collects rendered diagnostics in memory.
///
/// This is the crate's test double, and the place to keep the per-connection
/// message backlog when a caller wants to inspect diagnostics after the
/// fact instead of streaming them.
#[derive(Debug, Default)]
pub struct BufferSink {
    entries: Mutex<Vec<String>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Remove and return everything emitted so far.
    #[must_use]
    pub fn drain(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|mut guard| guard.drain(..).collect())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for BufferSink {
    fn emit(&self, diagnostic: &Diagnostic<'_>) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(diagnostic.render());
        }
    }
}

/// Routes diagnostics through `tracing`.
///
/// Server messages at severity 10 and below are informational and land at
/// `warn`; everything else is an `error` event. Client-side severities are
/// labeled with their `CS_SV_*` name when one exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic<'_>) {
        let rendered = diagnostic.render();
        let severity = diagnostic.severity();
        match diagnostic {
            Diagnostic::Server(m) if m.severity <= 10 => {
                tracing::warn!(severity, number = m.number, "{rendered}");
            }
            Diagnostic::Server(m) => {
                tracing::error!(severity, number = m.number, "{rendered}");
            }
            Diagnostic::CsLib(_) | Diagnostic::Client(_) => {
                let label = severity_name(severity).unwrap_or("unknown");
                tracing::error!(severity, severity_label = label, "{rendered}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::MessageCode;

    #[test]
    fn buffer_sink_collects_and_drains() {
        let sink = BufferSink::new();
        let msg = CsLibMessage::new(MessageCode::from_parts(2, 1, 5, 100), "net down");
        sink.emit(&Diagnostic::CsLib(&msg));
        sink.emit(&Diagnostic::CsLib(&msg));
        assert_eq!(sink.entries().len(), 2);
        assert_eq!(sink.drain().len(), 2);
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn diagnostic_severity_comes_from_the_right_field() {
        let cs = CsLibMessage::new(MessageCode::from_parts(2, 1, 5, 100), "x");
        assert_eq!(Diagnostic::CsLib(&cs).severity(), 5);

        let server = ServerMessage::new(50000, 16, 1, 1, "x");
        assert_eq!(Diagnostic::Server(&server).severity(), 16);
    }

    #[test]
    fn tracing_sink_emit_smoke() {
        let sink = TracingSink;
        let msg = ServerMessage::new(5701, 10, 1, 1, "Changed database context");
        sink.emit(&Diagnostic::Server(&msg));
    }
}
