//! Collector for accumulating diagnostics during a graph build.

use log::debug;

use crate::diagnostic::Diagnostic;

/// Accumulates diagnostics in the order they are emitted.
///
/// Each build owns its own collector, so independent builds never share
/// diagnostic state.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        debug!(code:% = diagnostic.code(), source = diagnostic.source(); "Diagnostic emitted");
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Finish collection and return every diagnostic in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
