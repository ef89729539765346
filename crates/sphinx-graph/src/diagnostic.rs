//! Advisory diagnostics produced while assembling a graph.
//!
//! Broken references never stop a build. Each one is recorded as a
//! [`Diagnostic`] naming the object it was found in, the name that failed to
//! resolve, and the kind of relationship ([`Relation`]) involved. The caller
//! decides where the diagnostics go; [`write_diagnostics`] writes them as
//! `Warning: <message>` lines to any sink.
//!
//! # Example
//!
//! ```
//! use sphinx_graph::diagnostic::{Diagnostic, Relation};
//!
//! let diag = Diagnostic::unresolved_call("pkg.foo", "pkg.missing");
//!
//! assert_eq!(diag.relation(), Relation::Call);
//! assert_eq!(diag.to_string(), "Warning: 'pkg.missing' not found, called from 'pkg.foo'");
//! ```

mod collector;

pub use collector::DiagnosticCollector;

use std::{fmt, io};

/// The severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A fatal issue.
    Error,

    /// An advisory issue; the graph is still produced.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

/// Codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// A call target is not a declared object.
    W001,

    /// An emitted event is not a declared event.
    W002,

    /// An override target is not a declared object.
    W003,

    /// An `exit` call has no open block to close.
    W004,
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The relationship in which a reference failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// A standard or enter call to another object.
    Call,
    /// An emit call firing an event.
    Emit,
    /// An override declared by an object.
    Override,
    /// Block nesting within a call sequence.
    Block,
}

/// A single advisory message with the context needed to locate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: DiagnosticCode,
    relation: Relation,
    source: String,
    target: Option<String>,
    message: String,
}

impl Diagnostic {
    /// A call from `source` names `target`, which is not a declared object.
    pub fn unresolved_call(source: &str, target: &str) -> Self {
        Self::warning(
            DiagnosticCode::W001,
            Relation::Call,
            source,
            Some(target),
            format!("'{target}' not found, called from '{source}'"),
        )
    }

    /// `source` emits `event`, which is not a declared event.
    pub fn unresolved_event(source: &str, event: &str) -> Self {
        Self::warning(
            DiagnosticCode::W002,
            Relation::Emit,
            source,
            Some(event),
            format!("'{event}' event not found, called from '{source}'"),
        )
    }

    /// `source` is overridden by `target`, which is not a declared object.
    pub fn unresolved_override(source: &str, target: &str) -> Self {
        Self::warning(
            DiagnosticCode::W003,
            Relation::Override,
            source,
            Some(target),
            format!("'{target}' not found, override of '{source}'"),
        )
    }

    /// `source` has an `exit` call with no open block.
    pub fn unmatched_exit(source: &str) -> Self {
        Self::warning(
            DiagnosticCode::W004,
            Relation::Block,
            source,
            None,
            format!("unmatched exit in '{source}'"),
        )
    }

    /// Promote this diagnostic to an error, for callers that deny warnings.
    pub fn denied(mut self) -> Self {
        self.severity = Severity::Error;
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> DiagnosticCode {
        self.code
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// The object or pipeline node the problem was found in.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The name that failed to resolve, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn warning(
        code: DiagnosticCode,
        relation: Relation,
        source: &str,
        target: Option<&str>,
        message: String,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            relation,
            source: source.to_string(),
            target: target.map(str::to_string),
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Write one line per diagnostic to `writer`.
///
/// # Errors
///
/// Returns any I/O error raised by the writer.
pub fn write_diagnostics(
    mut writer: impl io::Write,
    diagnostics: &[Diagnostic],
) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(writer, "{diagnostic}")?;
    }
    writer.flush()
}
