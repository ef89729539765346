//! Output backends for an assembled [`Digraph`].
//!
//! - [`dot::Dot`] writes the graph as Graphviz DOT source.
//! - [`graphviz::Graphviz`] pipes the DOT source through the external `dot`
//!   program to produce SVG, PNG or PDF.

pub mod dot;
pub mod graphviz;

use std::fmt;

use crate::structure::Digraph;

/// A single exporter trait for every output backend.
pub trait Exporter {
    fn export_graph(&self, graph: &Digraph) -> Result<(), Error>;
}

/// Output file format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// DOT source, written without invoking Graphviz.
    Dot,
    #[default]
    Svg,
    Png,
    Pdf,
}

impl From<OutputFormat> for &'static str {
    fn from(val: OutputFormat) -> Self {
        match val {
            OutputFormat::Dot => "dot",
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Dot.to_string(), "dot");
        assert_eq!(OutputFormat::default().to_string(), "svg");
        assert_eq!(OutputFormat::Pdf.to_string(), "pdf");
    }

    #[test]
    fn test_error_display() {
        let err = Error::Render("dot exited with status 1".to_string());
        assert_eq!(err.to_string(), "Render error: dot exited with status 1");
    }
}
