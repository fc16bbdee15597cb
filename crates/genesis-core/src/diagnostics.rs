//! Diagnostics side channel
//!
//! Decision logic never logs. The orchestration layer hands its messages to a
//! [`DiagnosticsSink`], so the core can be tested without any I/O.

use parking_lot::Mutex;

/// Diagnostic severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

/// Receiver of leveled diagnostic lines
///
/// Emission is infallible from the caller's point of view.
pub trait DiagnosticsSink: Send + Sync {
    fn emit(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }
}

/// Forwards to `tracing` under the `genesis` target
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(target: "genesis", "{}", message),
            Severity::Info => tracing::info!(target: "genesis", "{}", message),
            Severity::Warn => tracing::warn!(target: "genesis", "{}", message),
            Severity::Error => tracing::error!(target: "genesis", "{}", message),
        }
    }
}

/// Discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn emit(&self, _severity: Severity, _message: &str) {}
}

/// Records every line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far
    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines.lock().clone()
    }

    /// Messages only, in emission order
    pub fn messages(&self) -> Vec<String> {
        self.lines.lock().iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl DiagnosticsSink for MemorySink {
    fn emit(&self, severity: Severity, message: &str) {
        self.lines.lock().push((severity, message.to_string()));
    }
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for std::sync::Arc<S> {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}
