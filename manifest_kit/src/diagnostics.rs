//! # Diagnostics
//!
//! Side-channel reporting for the pipeline. Every rejection or
//! default-substitution produces exactly one diagnostic; silent drops
//! are forbidden. Diagnostics never alter the written document beyond
//! the name-defaulting behavior in the validator.

use core::fmt;
use std::cell::RefCell;

/// Diagnostic severity, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => f.write_str("note"),
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One reported message, optionally anchored to an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Qualified name of the element the message refers to
    pub element: Option<String>,
}

impl Diagnostic {
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Severity::Note, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            element: None,
        }
    }

    pub fn with_element(mut self, qualified_name: impl Into<String>) -> Self {
        self.element = Some(qualified_name.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            Some(element) => write!(f, "{}: {} [{}]", self.severity, self.message, element),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Destination for pipeline diagnostics
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that routes diagnostics through the `log` facade
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Note => log::info!("{}", diagnostic),
            Severity::Warning => log::warn!("{}", diagnostic),
            Severity::Error => log::error!("{}", diagnostic),
        }
    }
}

/// Sink that records diagnostics in memory, in report order.
///
/// Used by tests and by callers that want to present diagnostics
/// after the pass has finished.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RefCell<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics reported so far, in order
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    /// Drain the recorded diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        self.entries.borrow_mut().drain(..).collect()
    }

    pub fn count_of(&self, severity: Severity) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries.borrow_mut().push(diagnostic);
    }
}
