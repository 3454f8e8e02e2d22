//! Diagnostics configuration.
//!
//! An explicit configuration object replaces the original's bare
//! registration against ambient library state: whoever owns the connection
//! decides where diagnostics go and passes the config to
//! [`register_diagnostics`](crate::registry::register_diagnostics).

use std::sync::Arc;

use crate::sink::{DiagnosticSink, StderrSink};

/// Configuration for the diagnostic handlers.
#[derive(Debug, Clone)]
pub struct DiagnosticsConfig {
    sink: Arc<dyn DiagnosticSink>,
}

impl DiagnosticsConfig {
    /// Configuration writing to the process error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            sink: Arc::new(StderrSink),
        }
    }

    /// Configuration writing to the given sink.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    #[must_use]
    pub fn builder() -> DiagnosticsConfigBuilder {
        DiagnosticsConfigBuilder { sink: None }
    }

    /// The sink diagnostics are emitted to.
    #[must_use]
    pub fn sink(&self) -> Arc<dyn DiagnosticSink> {
        Arc::clone(&self.sink)
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Fluent builder for `DiagnosticsConfig`.
#[derive(Debug, Default)]
pub struct DiagnosticsConfigBuilder {
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl DiagnosticsConfigBuilder {
    #[must_use]
    pub fn sink<S: DiagnosticSink + 'static>(mut self, sink: Arc<S>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub fn finish(self) -> DiagnosticsConfig {
        match self.sink {
            Some(sink) => DiagnosticsConfig::with_sink(sink),
            None => DiagnosticsConfig::stderr(),
        }
    }
}
