use std::sync::atomic::{AtomicUsize, Ordering};

/// Side channel the engine reports malformed input through. The engine never
/// fails a batch; sink calls are the only observable effect of bad records.
pub trait DiagnosticsSink {
    fn error(&self, message: &str, context: &str);
    fn warn(&self, message: &str, context: &str);
}

/// Forwards diagnostics to `tracing` and keeps per-severity counts so the
/// caller can map a run onto an exit code.
#[derive(Debug, Default)]
pub struct TracingSink {
    errors: AtomicUsize,
    warnings: AtomicUsize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }
}

impl DiagnosticsSink for TracingSink {
    fn error(&self, message: &str, context: &str) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        tracing::error!(context = context, "{}", message);
    }

    fn warn(&self, message: &str, context: &str) {
        self.warnings.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(context = context, "{}", message);
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub context: String,
}

/// Buffers diagnostics for inspection; the sink the unit tests capture with.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CapturingSink {
    entries: std::cell::RefCell<Vec<Diagnostic>>,
}

#[cfg(test)]
impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|diagnostic| diagnostic.severity == severity)
            .count()
    }

    fn push(&self, severity: Severity, message: &str, context: &str) {
        self.entries.borrow_mut().push(Diagnostic {
            severity,
            message: message.to_string(),
            context: context.to_string(),
        });
    }
}

#[cfg(test)]
impl DiagnosticsSink for CapturingSink {
    fn error(&self, message: &str, context: &str) {
        self.push(Severity::Error, message, context);
    }

    fn warn(&self, message: &str, context: &str) {
        self.push(Severity::Warning, message, context);
    }
}
