//! sphinx-graph - Diagrams of the build process of a Sphinx project.
//!
//! A TOML description of the objects involved in a documentation build (who
//! calls whom, which events are emitted, which transforms run) is turned into
//! a Graphviz graph. Each object becomes a node whose label lists its calls
//! row by row; each row that references another object, event or transform
//! stage gets an edge of its own.
//!
//! The pipeline has three stages, all available through [`GraphBuilder`]:
//!
//! 1. [`GraphBuilder::parse`] loads and validates a [`model::Description`].
//! 2. [`GraphBuilder::build`] assembles a [`structure::Digraph`] and collects
//!    [`diagnostic::Diagnostic`]s for references that do not resolve.
//! 3. [`GraphBuilder::render_dot`] or [`GraphBuilder::render`] produce output.

pub mod config;
pub mod diagnostic;
pub mod export;
pub mod structure;

mod assembler;
mod error;

pub use sphinx_graph_core::{markup, model};

pub use assembler::{Assembly, POST_TRANSFORMS_ID, TRANSFORMS_ID, build_graph};
pub use error::SphinxGraphError;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, OutputFormat, dot::Dot, graphviz::Graphviz};
use model::Description;
use structure::Digraph;

/// Builder for loading, assembling and rendering sphinx-graph diagrams.
///
/// # Examples
///
/// ```rust
/// use sphinx_graph::{GraphBuilder, config::AppConfig};
///
/// let source = r#"
///     comment = "demo"
///
///     [objects."pkg.main"]
///     type = "function"
///     calls = [{ text = "pkg.helper" }]
///
///     [objects."pkg.helper"]
///     type = "function"
/// "#;
///
/// let builder = GraphBuilder::new(AppConfig::default());
/// let description = builder.parse(source).expect("Failed to parse");
///
/// let assembly = builder.build(&description);
/// assert!(assembly.diagnostics().is_empty());
///
/// let dot = builder.render_dot(assembly.graph());
/// assert!(dot.contains("\"pkg.main\":\"1\" -> \"pkg.helper\""));
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    config: AppConfig,
}

impl GraphBuilder {
    /// Create a new graph builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse TOML source into a description.
    ///
    /// # Errors
    ///
    /// Returns [`SphinxGraphError::Model`] for malformed TOML or any schema
    /// violation. The error keeps `source` so it can be reported in context.
    pub fn parse(&self, source: &str) -> Result<Description, SphinxGraphError> {
        info!("Parsing description");

        let description = Description::from_toml(source)
            .map_err(|err| SphinxGraphError::new_model_error(err, source))?;

        debug!("Description parsed successfully");
        trace!(description:?; "Parsed description");

        Ok(description)
    }

    /// Assemble the graph of `description` using the configured style.
    ///
    /// Unresolved references do not fail the build; they are returned in
    /// [`Assembly::diagnostics`].
    pub fn build(&self, description: &Description) -> Assembly {
        assembler::Assembler::new(description, &self.config).assemble()
    }

    /// Serialize a graph as DOT source.
    pub fn render_dot(&self, graph: &Digraph) -> String {
        export::dot::to_dot(graph)
    }

    /// Write `graph` to `file_name` in the given format.
    ///
    /// [`OutputFormat::Dot`] writes the DOT source directly; every other
    /// format runs the configured Graphviz program.
    ///
    /// # Errors
    ///
    /// Returns [`SphinxGraphError::Export`] if the file cannot be written or
    /// the renderer fails.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use sphinx_graph::{GraphBuilder, export::OutputFormat};
    ///
    /// let builder = GraphBuilder::default();
    /// let description = builder.parse("comment = \"\"\n[objects]\n").expect("Failed to parse");
    /// let assembly = builder.build(&description);
    ///
    /// builder
    ///     .render(assembly.graph(), OutputFormat::Svg, "sphinx_graph.svg")
    ///     .expect("Failed to render");
    /// ```
    pub fn render(
        &self,
        graph: &Digraph,
        format: OutputFormat,
        file_name: &str,
    ) -> Result<(), SphinxGraphError> {
        info!(format:% = format, file_name; "Rendering graph");

        match format {
            OutputFormat::Dot => Dot::new(file_name).export_graph(graph)?,
            OutputFormat::Svg | OutputFormat::Png | OutputFormat::Pdf => {
                Graphviz::new(file_name, format)
                    .with_program(self.config.render().program())
                    .export_graph(graph)?
            }
        }

        Ok(())
    }
}
