//! Error adapter for converting SphinxGraphError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Model errors
//! carry the description source and, when known, a byte range into it, so
//! they are rendered with the offending snippet highlighted.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use sphinx_graph::{SphinxGraphError, model::ModelError};

/// Adapter for a model error and the description it was raised on.
pub struct ModelAdapter<'a> {
    err: &'a ModelError,
    src: &'a str,
}

impl<'a> ModelAdapter<'a> {
    pub fn new(err: &'a ModelError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for ModelAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ModelAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ModelAdapter<'_> {}

impl MietteDiagnostic for ModelAdapter<'_> {
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            ModelError::EmptyKey { .. } => {
                Some(Box::new("every object, event and transform needs a name"))
            }
            ModelError::Toml { .. } => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

/// Adapter for [`SphinxGraphError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a SphinxGraphError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SphinxGraphError::Io(_) => "sphinx_graph::io",
            SphinxGraphError::Model { .. } => return None,
            SphinxGraphError::Config(_) => "sphinx_graph::config",
            SphinxGraphError::Export(_) => "sphinx_graph::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A model error with source location information.
    Model(ModelAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Model(m) => fmt::Display::fmt(m, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Model(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Model(m) => m.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Model(m) => m.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Model(m) => m.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Model(m) => m.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`SphinxGraphError`] into a list of reportable errors.
pub fn to_reportables(err: &SphinxGraphError) -> Vec<Reportable<'_>> {
    match err {
        SphinxGraphError::Model { err: model_err, src } => {
            vec![Reportable::Model(ModelAdapter::new(model_err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
